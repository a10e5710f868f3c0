use alloc::vec;
use alloc::vec::Vec;

/// Byte order applied when encoding integers into a bit stream
///
/// Integers are always laid out least significant bit first. Big endian
/// reverses the order of the 8-bit groups while the bits inside of a group
/// keep their order. When the bit width isn't a multiple of 8, the short group
/// holding the most significant bits comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the target platform
    ///
    /// ```rust
    /// use bitbuf::Endian;
    /// if cfg!(target_endian = "little") {
    ///     assert_eq!(Endian::NATIVE, Endian::Little);
    /// }
    /// ```
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Byte order of the target platform
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;
}

const CHUNK: usize = 8;

/// Reorders little endian bits into big endian group order, writing the result
/// into `dst`
///
/// Chunk `i` of `src` lands at `src.len() - end_of_chunk_i` so the trailing
/// short chunk, if any, lands at the start of `dst`.
///
/// ```rust
/// let src = [true, false, false, false, false, false, false, false, false, true];
/// let mut dst = [false; 10];
/// bitbuf::endian::swap_to_big(&src, &mut dst);
/// assert_eq!(&dst[..2], &[false, true]);
/// assert_eq!(&dst[2..], &src[..8]);
/// ```
///
/// # Panics
///
/// Panics if `src` and `dst` differ in length
pub fn swap_to_big(src: &[bool], dst: &mut [bool]) {
    assert_eq!(src.len(), dst.len(), "bit slices must be of equal length");
    let len = src.len();
    for (i, chunk) in src.chunks(CHUNK).enumerate() {
        let end = i * CHUNK + chunk.len();
        let offset = len - end;
        dst[offset..offset + chunk.len()].copy_from_slice(chunk);
    }
}

/// The inverse of [`swap_to_big`]: chunks are taken from the end of `src` and
/// laid out front to back in `dst`
///
/// # Panics
///
/// Panics if `src` and `dst` differ in length
pub fn swap_from_big(src: &[bool], dst: &mut [bool]) {
    assert_eq!(src.len(), dst.len(), "bit slices must be of equal length");
    for (i, chunk) in src.rchunks(CHUNK).enumerate() {
        let offset = i * CHUNK;
        dst[offset..offset + chunk.len()].copy_from_slice(chunk);
    }
}

/// Allocating version of [`swap_to_big`]
///
/// ```rust
/// use bitbuf::endian::{from_big_endian_order, to_big_endian_order};
/// let bits = vec![true; 11];
/// assert_eq!(from_big_endian_order(&to_big_endian_order(&bits)), bits);
/// ```
pub fn to_big_endian_order(bits: &[bool]) -> Vec<bool> {
    let mut result = vec![false; bits.len()];
    swap_to_big(bits, &mut result);
    result
}

/// Allocating version of [`swap_from_big`]
pub fn from_big_endian_order(bits: &[bool]) -> Vec<bool> {
    let mut result = vec![false; bits.len()];
    swap_from_big(bits, &mut result);
    result
}
