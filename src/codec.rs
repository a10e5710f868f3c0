//! Fixed width integer encoding over any bit stream.
//!
//! Values are laid out least significant bit first. Requesting
//! [`Endian::Big`] reorders the 8-bit groups of that layout with
//! [`swap_to_big`](crate::endian::swap_to_big) before the bits reach the
//! stream, and undoes it on the way back.
//!
//! Signed values are stored as the low `bits - 1` bits of the value followed
//! by a sign flag. For values that fit the width this coincides with two's
//! complement, but positive values that need the top bit lose it instead of
//! turning negative:
//!
//! ```rust
//! use bitbuf::{codec, BitBuffer, Endian};
//! let mut buf = BitBuffer::new();
//! codec::write_signed(&mut buf, 8, Endian::Little, 200).unwrap();
//! buf.reset_to_start();
//! assert_eq!(codec::read_signed(&mut buf, 8, Endian::Little), Ok(72));
//! ```

use crate::endian::{swap_from_big, swap_to_big};
use crate::{BitReader, BitWriter, Endian, Error, Result};

/// The widest integer the codec handles
pub const MAX_BITS: u32 = 64;

const MAX_WIDTH: usize = MAX_BITS as usize;

#[inline]
fn unsigned_width(bits: u32) -> Result<usize> {
    if bits == 0 || bits > MAX_BITS {
        Err(Error::InvalidArgument(
            "unsigned width must be between 1 and 64 bits",
        ))
    } else {
        Ok(bits as usize)
    }
}

#[inline]
fn signed_width(bits: u32) -> Result<usize> {
    if bits < 2 || bits > MAX_BITS {
        Err(Error::InvalidArgument(
            "signed width must be between 2 and 64 bits",
        ))
    } else {
        Ok(bits as usize)
    }
}

fn write_ordered<W: BitWriter + ?Sized>(
    writer: &mut W,
    le: &[bool],
    endian: Endian,
) -> Result<()> {
    let mut swapped = [false; MAX_WIDTH];
    let out = match endian {
        Endian::Little => le,
        Endian::Big => {
            swap_to_big(le, &mut swapped[..le.len()]);
            &swapped[..le.len()]
        }
    };

    let written = writer.write_bits(out)?;
    if written != out.len() {
        return Err(Error::ShortTransfer {
            expected: out.len(),
            actual: written,
        });
    }

    Ok(())
}

/// Reads `width` bits and returns them in little endian order. Only the first
/// `width` entries of the returned array are meaningful.
fn read_ordered<R: BitReader + ?Sized>(
    reader: &mut R,
    width: usize,
    endian: Endian,
) -> Result<[bool; MAX_WIDTH]> {
    let mut raw = [false; MAX_WIDTH];
    let read = reader.read_bits(&mut raw[..width])?;
    if read == 0 {
        return Err(Error::EndOfData);
    } else if read != width {
        return Err(Error::ShortTransfer {
            expected: width,
            actual: read,
        });
    }

    match endian {
        Endian::Little => Ok(raw),
        Endian::Big => {
            let mut le = [false; MAX_WIDTH];
            swap_from_big(&raw[..width], &mut le[..width]);
            Ok(le)
        }
    }
}

/// Writes the low `bits` bits of `value`. Bits above the width are silently
/// dropped.
///
/// ```rust
/// use bitbuf::{codec, BitBuffer, Endian};
/// let mut buf = BitBuffer::new();
/// for i in 1..=4 {
///     codec::write_unsigned(&mut buf, 4, Endian::Little, i).unwrap();
/// }
/// assert_eq!(buf.to_bytes(), vec![0x21, 0x43]);
/// ```
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `bits` is outside `1..=64`, and
/// [`Error::ShortTransfer`] when the writer accepts fewer bits than given.
pub fn write_unsigned<W: BitWriter + ?Sized>(
    writer: &mut W,
    bits: u32,
    endian: Endian,
    value: u64,
) -> Result<()> {
    let width = unsigned_width(bits)?;
    let mut le = [false; MAX_WIDTH];
    for (i, bit) in le[..width].iter_mut().enumerate() {
        *bit = (value >> i) & 1 == 1;
    }
    write_ordered(writer, &le[..width], endian)
}

/// Reads a `bits` wide unsigned integer
///
/// ```rust
/// use bitbuf::{codec, BitBuffer, Endian};
/// let mut buf = BitBuffer::from_bytes(&[0x12, 0x34]);
/// assert_eq!(codec::read_unsigned(&mut buf, 16, Endian::Big), Ok(0x1234));
/// ```
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `bits` is outside `1..=64`,
/// [`Error::EndOfData`] when the reader had nothing left, and
/// [`Error::ShortTransfer`] when it ran out partway through the value. The bits
/// that were available are still consumed.
pub fn read_unsigned<R: BitReader + ?Sized>(
    reader: &mut R,
    bits: u32,
    endian: Endian,
) -> Result<u64> {
    let width = unsigned_width(bits)?;
    let le = read_ordered(reader, width, endian)?;
    let value = le[..width]
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &bit)| acc | (u64::from(bit) << i));
    Ok(value)
}

/// Writes the low `bits - 1` bits of `value` followed by a flag set when
/// `value` is negative
///
/// ```rust
/// use bitbuf::{codec, BitBuffer, Endian};
/// let mut buf = BitBuffer::new();
/// codec::write_signed(&mut buf, 4, Endian::Little, -3).unwrap();
/// assert_eq!(buf.to_bytes(), vec![0b0000_1101]);
/// ```
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `bits` is outside `2..=64`, and
/// [`Error::ShortTransfer`] when the writer accepts fewer bits than given.
pub fn write_signed<W: BitWriter + ?Sized>(
    writer: &mut W,
    bits: u32,
    endian: Endian,
    value: i64,
) -> Result<()> {
    let width = signed_width(bits)?;
    let mut le = [false; MAX_WIDTH];
    for (i, bit) in le[..width - 1].iter_mut().enumerate() {
        *bit = (value >> i) & 1 == 1;
    }
    le[width - 1] = value < 0;
    write_ordered(writer, &le[..width], endian)
}

/// Reads a `bits` wide signed integer written by [`write_signed`]. The top bit
/// decides the sign and every bit above the width takes its value.
///
/// ```rust
/// use bitbuf::{codec, BitBuffer, Endian};
/// let mut buf = BitBuffer::from_bytes(&[0b0000_1101]);
/// assert_eq!(codec::read_signed(&mut buf, 4, Endian::Little), Ok(-3));
/// assert_eq!(codec::read_signed(&mut buf, 4, Endian::Little), Ok(0));
/// ```
///
/// # Errors
///
/// Same as [`read_unsigned`], with the width restricted to `2..=64`.
pub fn read_signed<R: BitReader + ?Sized>(
    reader: &mut R,
    bits: u32,
    endian: Endian,
) -> Result<i64> {
    let width = signed_width(bits)?;
    let le = read_ordered(reader, width, endian)?;

    let mut value: i64 = if le[width - 1] { -1 } else { 0 };
    for (i, &bit) in le[..width - 1].iter().enumerate() {
        value &= !(1 << i);
        if bit {
            value |= 1 << i;
        }
    }

    Ok(value)
}
