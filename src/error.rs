use core::fmt;

/// Errors raised by bit buffer operations and the integer codec
///
/// ```rust
/// use bitbuf::{BitBuffer, Error};
/// let mut buf = BitBuffer::new();
/// let mut out = [0u8; 1];
/// assert_eq!(buf.read_bytes(&mut out), Err(Error::EndOfData));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside of what the operation accepts, such as a
    /// zero-width integer or a cursor position past the end of the buffer
    InvalidArgument(&'static str),

    /// A read was attempted with the cursor already at the end
    EndOfData,

    /// Fewer elements were transferred than requested
    ShortTransfer { expected: usize, actual: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::EndOfData => write!(f, "no bits left to read"),
            Error::ShortTransfer { expected, actual } => {
                write!(f, "only {} of {} bits transferred", actual, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        let kind = match err {
            Error::InvalidArgument(_) => ErrorKind::InvalidInput,
            Error::EndOfData | Error::ShortTransfer { .. } => ErrorKind::UnexpectedEof,
        };
        std::io::Error::new(kind, err)
    }
}
