use bitbuf::endian::{from_big_endian_order, to_big_endian_order};
use bitbuf::{BitBuffer, BitReader, BitWriter, Endian};
use quickcheck_macros::quickcheck;

fn clamp_width(bits: u8, min: u32) -> u32 {
    (u32::from(bits) % 64).max(min - 1) + 1
}

fn mask(bits: u32) -> u64 {
    u64::MAX >> (64 - bits)
}

#[quickcheck]
fn big_endian_order_round_trip(bits: Vec<bool>) -> bool {
    from_big_endian_order(&to_big_endian_order(&bits)) == bits
}

#[quickcheck]
fn big_endian_order_keeps_bits(bits: Vec<bool>) -> bool {
    let big = to_big_endian_order(&bits);
    big.len() == bits.len()
        && big.iter().filter(|&&x| x).count() == bits.iter().filter(|&&x| x).count()
}

#[quickcheck]
fn from_bytes_to_bytes(data: Vec<u8>) -> bool {
    let buf = BitBuffer::from_bytes(&data);
    buf.len() == data.len() * 8 && buf.to_bytes() == data
}

#[quickcheck]
fn read_bytes_eq(data: Vec<u8>) -> bool {
    let mut buf = BitBuffer::from_bytes(&data);
    let mut out = vec![0u8; data.len() + 1];
    match buf.read_bytes(&mut out) {
        Ok(n) => n == data.len() && out[..n] == data[..] && buf.at_end(),
        Err(_) => data.is_empty(),
    }
}

#[quickcheck]
fn read_bits_short_count(bits: Vec<bool>, want: u8) -> bool {
    let mut buf = BitBuffer::from_bits(&bits);
    let mut out = vec![false; usize::from(want)];
    let n = buf.read_bits(&mut out).unwrap();
    n == bits.len().min(out.len()) && out[..n] == bits[..n] && buf.position() == n
}

#[quickcheck]
fn to_bytes_pads_high_bits(bits: Vec<bool>) -> bool {
    let bytes = BitBuffer::from_bits(&bits).to_bytes();
    let tail = bits.len() % 8;
    bytes.len() == (bits.len() + 7) / 8
        && (tail == 0 || bytes[bytes.len() - 1] >> tail == 0)
}

#[quickcheck]
fn unsigned_round_trip(bits: u8, value: u64, big: bool) -> bool {
    let bits = clamp_width(bits, 1);
    let value = value & mask(bits);
    let endian = if big { Endian::Big } else { Endian::Little };

    let mut buf = BitBuffer::new();
    buf.write_unsigned(bits, endian, value).unwrap();
    buf.reset_to_start();
    buf.len() == bits as usize && buf.read_unsigned(bits, endian) == Ok(value)
}

#[quickcheck]
fn unsigned_truncates(bits: u8, value: u64) -> bool {
    let bits = clamp_width(bits, 1);
    let mut buf = BitBuffer::new();
    buf.write_unsigned(bits, Endian::Little, value).unwrap();
    buf.reset_to_start();
    buf.read_unsigned(bits, Endian::Little) == Ok(value & mask(bits))
}

#[quickcheck]
fn signed_round_trip_in_range(bits: u8, value: i64, big: bool) -> bool {
    let bits = clamp_width(bits, 2);
    let value = value >> (64 - bits);
    let endian = if big { Endian::Big } else { Endian::Little };

    let mut buf = BitBuffer::new();
    buf.write_signed(bits, endian, value).unwrap();
    buf.reset_to_start();
    buf.read_signed(bits, endian) == Ok(value)
}

#[quickcheck]
fn big_endian_whole_bytes(value: u64, bytes: u8) -> bool {
    let bytes = usize::from(bytes % 8) + 1;
    let bits = (bytes * 8) as u32;
    let value = value & mask(bits);

    let mut buf = BitBuffer::new();
    buf.write_unsigned(bits, Endian::Big, value).unwrap();
    buf.to_bytes() == value.to_be_bytes()[8 - bytes..].to_vec()
}

#[quickcheck]
fn patch_keeps_length(data: Vec<u8>, pos: usize, bit: bool) -> bool {
    if data.is_empty() {
        return true;
    }

    let mut buf = BitBuffer::from_bytes(&data);
    let pos = pos % buf.len();
    buf.set_position(pos).unwrap();
    buf.write_bit(bit).unwrap();
    buf.len() == data.len() * 8 && buf.as_bits()[pos] == bit && buf.position() == pos + 1
}
