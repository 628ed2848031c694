//! Reader-based unpacker implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use thiserror::Error;

use crate::sans::{
    order::ByteOrder,
    size::WidthError,
    trace::Trace,
    word::{Word, WordWidth},
};

use super::{Destination, Options, unpack_slot};

extern crate std;

/// Errors occurring while unpacking from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader. Running out of bytes is reported as
    /// [`std::io::ErrorKind::UnexpectedEof`].
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A field's width tag is missing or not a positive integer.
    #[error("Field {index} has a missing or malformed bit width.")]
    MalformedWidthTag { index: usize },
    /// A composite's total width is zero or not a whole number of bytes.
    #[error("Total width ({0} bits) is not a whole number of bytes.")]
    InvalidBitWidth(u64),
    /// A composite's total width is not one the unpacker accepts.
    #[error("Total width ({0} bits) is not supported.")]
    UnsupportedWidth(u64),
}

impl From<WidthError> for Error {
    fn from(err: WidthError) -> Self {
        match err {
            WidthError::MalformedWidthTag { index } => Self::MalformedWidthTag { index },
            WidthError::InvalidBitWidth(bits) => Self::InvalidBitWidth(bits),
            WidthError::UnsupportedWidth(bits) => Self::UnsupportedWidth(bits),
        }
    }
}

/// Unpack a sequence of destinations from a reader, in order.
///
/// Returns the total number of bytes consumed. Only the bytes the
/// destinations require are read. This method is also re-exported as
/// `bitunpack::avec::unpack_reader`.
///
/// _Requires Cargo feature `std`._
pub fn unpack(
    r: &mut impl Read,
    order: ByteOrder,
    d: &mut [&mut dyn Destination],
) -> Result<usize, Error> {
    unpack_with(r, Options::new(order), d, &mut ())
}

/// Unpack a sequence of destinations from a reader, with options and a trace.
///
/// _Requires Cargo feature `std`._
pub fn unpack_with(
    r: &mut impl Read,
    options: Options,
    d: &mut [&mut dyn Destination],
    trace: &mut impl Trace,
) -> Result<usize, Error> {
    let i = &mut 0; // Counter of bytes consumed.

    for d in d {
        *i += unpack_slot(d.slot(), options, |w| read_unsigned(r, w, options.order), trace)?;
    }

    Ok(*i)
}

fn read_unsigned(r: &mut impl Read, width: WordWidth, order: ByteOrder) -> Result<u64, Error> {
    Ok(match width {
        WordWidth::W8 => read_word::<u8, 1>(r, order)?.into(),
        WordWidth::W16 => read_word::<u16, 2>(r, order)?.into(),
        WordWidth::W32 => read_word::<u32, 4>(r, order)?.into(),
        WordWidth::W64 => read_word::<u64, 8>(r, order)?,
    })
}

/// Read an exact number of bytes from a reader, assembling them into a word.
fn read_word<T: Word<From = [u8; N]>, const N: usize>(
    r: &mut impl Read,
    order: ByteOrder,
) -> Result<T, Error> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;

    Ok(T::assemble(buf, order))
}
