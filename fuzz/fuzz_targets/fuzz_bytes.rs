#![no_main]
use libfuzzer_sys::fuzz_target;
use bitbuf::{BitBuffer, BitReader};

fuzz_target!(|data: &[u8]| {
    let mut bits = BitBuffer::from_bytes(data);
    assert_eq!(bits.to_bytes(), data);

    // Knock the cursor off alignment and drain the rest as bytes. The final
    // byte comes back short a bit.
    if bits.read_bit().is_ok() {
        let mut out = vec![0u8; data.len()];
        assert_eq!(bits.read_bytes(&mut out), Ok(data.len()));
    }

    assert!(bits.at_end());
});
