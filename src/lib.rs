/*!

***A bit buffer you can seek around in***

Bitbuf stores an ordered, growable run of bits behind a single read/write
cursor and encodes fixed width integers into it. It is meant as the substrate
for hand rolled wire formats where fields aren't byte aligned: a 6 bit tag
followed by an 11 bit length followed by a 3 bit flag set.

## Features

 - ✔ bit and byte granularity reads and writes sharing one cursor
 - ✔ writes past the end append, writes before the end patch in place
 - ✔ unsigned and signed integers from 1 to 64 bits wide
 - ✔ little endian and big endian integer layouts at the bit level
 - ✔ `std::io::Read` and `std::io::Write` support
 - ✔ zero dependencies
 - ✔ `no_std` compatible (requires `alloc`)

## Example

```rust
use bitbuf::{BitBuffer, BitReader, BitWriter, Endian};

let mut buf = BitBuffer::new();
buf.write_unsigned(6, Endian::Little, 42).unwrap();
buf.write_signed(11, Endian::Big, -300).unwrap();
buf.write_bit(true).unwrap();
assert_eq!(buf.len(), 18);

buf.reset_to_start();
assert_eq!(buf.read_unsigned(6, Endian::Little), Ok(42));
assert_eq!(buf.read_signed(11, Endian::Big), Ok(-300));
assert_eq!(buf.read_bit(), Ok(true));
assert!(buf.at_end());
```

Writing at the end of the buffer appends. Moving the cursor backwards and
writing again overwrites what is there, which is how a length prefix can be
filled in once the payload it describes has been written:

```rust
use bitbuf::{BitBuffer, BitWriter, Endian};

let mut buf = BitBuffer::new();
buf.write_unsigned(4, Endian::Little, 0).unwrap();
buf.write_bytes(&[0xab, 0xcd]);

buf.reset_to_start();
buf.write_unsigned(4, Endian::Little, 2).unwrap();
assert_eq!(buf.len(), 20);
assert_eq!(buf.to_bytes(), vec![0xb2, 0xda, 0x0c]);
```

Bytes are packed least significant bit first: the first bit of every group of
eight lands in bit 0 of the byte. This holds regardless of the [`Endian`]
chosen for integers, which only decides the order of the 8-bit groups of an
encoded value.

### `no_std` crates

This crate has a feature, `std`, that is enabled by default. To use this crate
in a `no_std` context, add the following to your `Cargo.toml`:

```toml
[dependencies]
bitbuf = { version = "x", default-features = false }
```

*/

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod buffer;
pub mod codec;
pub mod endian;
mod error;
mod writer;

pub use crate::buffer::BitBuffer;
pub use crate::endian::Endian;
pub use crate::error::{Error, Result};
pub use crate::writer::BitWriter;

/// Read bits from a stream
///
/// The only required method is [`read_bits`](BitReader::read_bits); the rest
/// build on it.
pub trait BitReader {
    /// Reads up to `dest.len()` bits into `dest` and returns how many were
    /// read. Running out of bits before `dest` is full is not an error: the
    /// count comes back short and only that prefix of `dest` is written.
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitReader};
    /// let mut bits = BitBuffer::from_bits(&[true, false, true]);
    /// let mut out = [false; 4];
    /// assert_eq!(bits.read_bits(&mut out), Ok(3));
    /// assert_eq!(&out[..3], &[true, false, true]);
    /// assert_eq!(bits.read_bits(&mut out), Ok(0));
    /// ```
    fn read_bits(&mut self, dest: &mut [bool]) -> Result<usize>;

    /// Consume a single bit
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitReader, Error};
    /// let mut bits = BitBuffer::from_bits(&[true]);
    /// assert_eq!(bits.read_bit(), Ok(true));
    /// assert_eq!(bits.read_bit(), Err(Error::EndOfData));
    /// ```
    fn read_bit(&mut self) -> Result<bool> {
        let mut bit = [false];
        match self.read_bits(&mut bit)? {
            0 => Err(Error::EndOfData),
            _ => Ok(bit[0]),
        }
    }

    /// Reads an unsigned integer `bits` wide (1 to 64 inclusive). See
    /// [`codec::read_unsigned`].
    ///
    /// ```rust
    /// use bitbuf::{BitBuffer, BitReader, Endian};
    /// let mut bits = BitBuffer::from_bytes(&[0x21, 0x43]);
    /// assert_eq!(bits.read_unsigned(4, Endian::Little), Ok(1));
    /// assert_eq!(bits.read_unsigned(12, Endian::Little), Ok(0x432));
    /// ```
    fn read_unsigned(&mut self, bits: u32, endian: Endian) -> Result<u64> {
        codec::read_unsigned(self, bits, endian)
    }

    /// Reads a signed integer `bits` wide (2 to 64 inclusive). See
    /// [`codec::read_signed`].
    fn read_signed(&mut self, bits: u32, endian: Endian) -> Result<i64> {
        codec::read_signed(self, bits, endian)
    }
}
