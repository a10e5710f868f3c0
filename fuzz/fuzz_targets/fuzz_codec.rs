#![no_main]
use libfuzzer_sys::fuzz_target;
use bitbuf::{BitBuffer, BitReader, BitWriter, Endian};

fuzz_target!(|data: &[u8]| {
    let mut bits = BitBuffer::from_bytes(data);
    let mut fields = Vec::new();

    // Decode the input as a run of (width, endian, signed) fields until it is
    // exhausted, then re-encode them and expect the same bits back
    while let Ok(header) = bits.read_unsigned(8, Endian::Little) {
        let width = (header & 0x3f) as u32 + 1;
        let endian = if header & 0x40 == 0 { Endian::Little } else { Endian::Big };
        let signed = header & 0x80 != 0 && width >= 2;

        let start = bits.position();
        let value = if signed {
            match bits.read_signed(width, endian) {
                Ok(x) => x as u64,
                Err(_) => break,
            }
        } else {
            match bits.read_unsigned(width, endian) {
                Ok(x) => x,
                Err(_) => break,
            }
        };

        fields.push((start, width, endian, signed, value));
    }

    let mut out = bits.clone();
    for &(start, width, endian, signed, value) in &fields {
        out.set_position(start).unwrap();
        if signed {
            out.write_signed(width, endian, value as i64).unwrap();
        } else {
            out.write_unsigned(width, endian, value).unwrap();
        }
    }

    assert_eq!(out.as_bits(), bits.as_bits());
});
