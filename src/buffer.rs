use crate::{BitReader, BitWriter, Error, Result};
use alloc::vec::Vec;
use core::iter::FromIterator;

/// A growable sequence of bits with a single read/write cursor
///
/// Reads start at the cursor and move it forward. Writes land on the cursor
/// too: a write at the end of the buffer appends while a write anywhere
/// before the end overwrites the bits already there.
///
/// ```rust
/// use bitbuf::BitBuffer;
/// let mut buf = BitBuffer::from_bits(&[false, false, false, false]);
/// buf.reset_to_end();
/// buf.write_bytes(&[0xff]);
/// assert_eq!(buf.len(), 12);
/// assert_eq!(buf.to_bytes(), vec![0xf0, 0x0f]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    /// Every bit stored, in the order it was written
    bits: Vec<bool>,

    /// Index of the next bit to read or write. Never exceeds `bits.len()`
    pos: usize,
}

#[inline]
fn pack_byte(bits: &[bool]) -> u8 {
    debug_assert!(bits.len() <= 8);
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i))
}

impl BitBuffer {
    /// Creates an empty buffer
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for at least `bits` bits
    #[inline]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
            pos: 0,
        }
    }

    /// Creates a buffer holding the bits of `data`, cursor at the start
    ///
    /// ```rust
    /// use bitbuf::BitBuffer;
    /// let buf = BitBuffer::from_bytes(&[0b0000_0101]);
    /// assert_eq!(&buf.as_bits()[..4], &[true, false, true, false]);
    /// assert_eq!(buf.position(), 0);
    /// ```
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut result = Self::with_capacity(data.len() * 8);
        result.write_bytes(data);
        result.reset_to_start();
        result
    }

    /// Creates a buffer holding a copy of `bits`, cursor at the start
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
            pos: 0,
        }
    }

    /// Moves the cursor to the first bit
    #[inline]
    pub fn reset_to_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor past the last bit so that writes append
    #[inline]
    pub fn reset_to_end(&mut self) {
        self.pos = self.bits.len();
    }

    /// Returns true if the cursor is past the last bit
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos == self.bits.len()
    }

    /// Index of the next bit to be read or written
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an arbitrary bit index
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitReader, Error};
    /// let mut buf = BitBuffer::from_bytes(&[0b0000_0100]);
    /// assert_eq!(buf.set_position(2), Ok(()));
    /// assert_eq!(buf.read_bit(), Ok(true));
    /// assert!(buf.set_position(9).is_err());
    /// assert_eq!(buf.position(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `pos` is beyond the end of the buffer, in
    /// which case the cursor doesn't move.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos > self.bits.len() {
            return Err(Error::InvalidArgument("position is past the end of the buffer"));
        }

        self.pos = pos;
        Ok(())
    }

    /// Total number of bits stored, independent of the cursor
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if no bits have been stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits between the cursor and the end
    #[inline]
    pub fn bits_remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Returns true if the cursor sits on a multiple of 8
    #[inline]
    pub fn byte_aligned(&self) -> bool {
        self.pos % 8 == 0
    }

    /// The stored bits, first written first
    #[inline]
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Unwraps the buffer into its stored bits
    #[inline]
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Drops every stored bit and moves the cursor to the start
    pub fn clear(&mut self) {
        self.bits.clear();
        self.pos = 0;
    }

    /// Packs the entire buffer into bytes, eight bits at a time, without
    /// touching the cursor. A trailing partial byte is zero padded in its
    /// high bits.
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitReader};
    /// let mut buf = BitBuffer::from_bits(&[true, false, true]);
    /// assert_eq!(buf.read_bit(), Ok(true));
    /// assert_eq!(buf.to_bytes(), vec![0b101]);
    /// assert_eq!(buf.position(), 1);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.chunks(8).map(pack_byte).collect()
    }

    /// Fills `dest` with bytes packed from the bits at the cursor and returns
    /// how many bytes were filled. Fewer than `dest.len()` bytes are filled
    /// once the buffer runs dry; a trailing partial byte is zero padded and
    /// the cursor stops at the end.
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, Error};
    /// let mut buf = BitBuffer::from_bits(&[true, false, true]);
    /// let mut out = [0u8; 2];
    /// assert_eq!(buf.read_bytes(&mut out), Ok(1));
    /// assert_eq!(out[0], 5);
    /// assert_eq!(buf.read_bytes(&mut out), Err(Error::EndOfData));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::EndOfData`] if the cursor is already at the end
    pub fn read_bytes(&mut self, dest: &mut [u8]) -> Result<usize> {
        if self.at_end() {
            return Err(Error::EndOfData);
        }

        let mut n = 0;
        for dst in dest.iter_mut() {
            if self.at_end() {
                break;
            }

            *dst = self.read_byte();
            n += 1;
        }

        Ok(n)
    }

    /// Writes each byte of `data` as 8 bits, least significant bit first, and
    /// returns `data.len()`
    pub fn write_bytes(&mut self, data: &[u8]) -> usize {
        for &byte in data {
            self.write_byte(byte);
        }
        data.len()
    }

    #[inline]
    fn read_byte(&mut self) -> u8 {
        let end = (self.pos + 8).min(self.bits.len());
        let byte = pack_byte(&self.bits[self.pos..end]);
        self.pos = end;
        byte
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) {
        for i in 0..8 {
            self.put((byte >> i) & 1 == 1);
        }
    }

    #[inline]
    fn put(&mut self, bit: bool) {
        if self.pos < self.bits.len() {
            self.bits[self.pos] = bit;
        } else {
            self.bits.push(bit);
        }
        self.pos += 1;
    }
}

impl BitReader for BitBuffer {
    #[inline]
    fn read_bits(&mut self, dest: &mut [bool]) -> Result<usize> {
        let n = dest.len().min(self.bits_remaining());
        dest[..n].copy_from_slice(&self.bits[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    #[inline]
    fn read_bit(&mut self) -> Result<bool> {
        let bit = *self.bits.get(self.pos).ok_or(Error::EndOfData)?;
        self.pos += 1;
        Ok(bit)
    }
}

impl BitWriter for BitBuffer {
    #[inline]
    fn write_bits(&mut self, bits: &[bool]) -> Result<usize> {
        let overlap = self.bits_remaining().min(bits.len());
        let (patch, append) = bits.split_at(overlap);
        self.bits[self.pos..self.pos + overlap].copy_from_slice(patch);
        self.bits.extend_from_slice(append);
        self.pos += bits.len();
        Ok(bits.len())
    }

    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.put(bit);
        Ok(())
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
            pos: 0,
        }
    }
}

/// Writes each bit at the cursor, exactly like
/// [`write_bits`](BitWriter::write_bits)
impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.put(bit);
        }
    }
}

/// Reading past the end yields `Ok(0)`, the end of stream signal for
/// `std::io::Read`
#[cfg(feature = "std")]
impl std::io::Read for BitBuffer {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.read_bytes(buf) {
            Err(Error::EndOfData) => Ok(0),
            res => res.map_err(std::io::Error::from),
        }
    }
}

#[cfg(feature = "std")]
impl std::io::Write for BitBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(self.write_bytes(buf))
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
