#![no_main]
use libfuzzer_sys::fuzz_target;
use bitbuf::endian::{from_big_endian_order, to_big_endian_order};

fuzz_target!(|data: &[u8]| {
    let bits: Vec<bool> = data.iter().map(|&x| x & 1 == 1).collect();
    let big = to_big_endian_order(&bits);
    assert_eq!(big.len(), bits.len());
    assert_eq!(from_big_endian_order(&big), bits);
});
