use crate::{codec, Endian, Error, Result};

/// Write bits to a stream
///
/// The only required method is [`write_bits`](BitWriter::write_bits); the
/// rest build on it. Implementations should accept every bit they are given;
/// the integer codec treats a short count as [`Error::ShortTransfer`].
///
/// # Examples
///
/// ```rust
/// use bitbuf::{BitBuffer, BitWriter, Endian};
///
/// let mut buf = BitBuffer::new();
/// buf.write_bit(true).unwrap();
/// buf.write_bits(&[false, true]).unwrap();
/// buf.write_unsigned(5, Endian::Little, 0b1_1111).unwrap();
/// assert_eq!(buf.to_bytes(), vec![0b1111_1101]);
/// ```
pub trait BitWriter {
    /// Writes every bit of `bits` in order and returns how many were written
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitWriter};
    /// let mut buf = BitBuffer::new();
    /// assert_eq!(buf.write_bits(&[true, false, true]), Ok(3));
    /// assert_eq!(buf.as_bits(), &[true, false, true]);
    /// ```
    fn write_bits(&mut self, bits: &[bool]) -> Result<usize>;

    /// Write a single bit
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        match self.write_bits(&[bit])? {
            1 => Ok(()),
            actual => Err(Error::ShortTransfer {
                expected: 1,
                actual,
            }),
        }
    }

    /// Writes the low `bits` bits (1 to 64 inclusive) of `value`. See
    /// [`codec::write_unsigned`].
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitWriter, Endian};
    /// let mut buf = BitBuffer::new();
    /// buf.write_unsigned(16, Endian::Big, 0x1234).unwrap();
    /// assert_eq!(buf.to_bytes(), vec![0x12, 0x34]);
    /// ```
    fn write_unsigned(&mut self, bits: u32, endian: Endian, value: u64) -> Result<()> {
        codec::write_unsigned(self, bits, endian, value)
    }

    /// Writes `value` as a `bits` wide (2 to 64 inclusive) signed integer. See
    /// [`codec::write_signed`].
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitWriter, Endian};
    /// let mut buf = BitBuffer::new();
    /// buf.write_signed(4, Endian::Little, -3).unwrap();
    /// assert_eq!(buf.to_bytes(), vec![0x0d]);
    /// ```
    fn write_signed(&mut self, bits: u32, endian: Endian, value: i64) -> Result<()> {
        codec::write_signed(self, bits, endian, value)
    }
}
