//! Slice-based unpacker implementation.

use thiserror::Error;

use crate::sans::{
    cursor::{Cursor, InsufficientData},
    order::ByteOrder,
    size::WidthError,
    trace::Trace,
};

use super::{Destination, Options, unpack_slot};

/// Errors occurring while unpacking from a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer bytes remain in the slice than a destination requires.
    #[error("Needed {needed} bytes, but only {remaining} remain.")]
    InsufficientData { needed: usize, remaining: usize },
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

impl From<InsufficientData> for Error {
    fn from(err: InsufficientData) -> Self {
        let InsufficientData { needed, remaining } = err;
        Self::InsufficientData { needed, remaining }
    }
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

/// Unpack a sequence of destinations from a slice, in order.
///
/// Returns the total number of bytes consumed. This method is also
/// re-exported as `bitunpack::avec::unpack_slice`.
///
/// On error, no byte count is returned and the remaining destinations are left
/// untouched. Destinations decoded before the failure keep their new values.
/// Use an [`Unpacker`] to observe progress up to a failure.
pub fn unpack(
    r: &[u8],
    order: ByteOrder,
    d: &mut [&mut dyn Destination],
) -> Result<usize, Error> {
    unpack_with(r, Options::new(order), d, &mut ())
}

/// Unpack a sequence of destinations from a slice, with options and a trace.
pub fn unpack_with(
    r: &[u8],
    options: Options,
    d: &mut [&mut dyn Destination],
    trace: &mut impl Trace,
) -> Result<usize, Error> {
    let mut unpacker = Unpacker::with_trace(r, options, trace);

    for d in d {
        unpacker.advance(&mut **d)?;
    }

    Ok(unpacker.position())
}

/// Unpack destinations from a slice one at a time.
#[derive(Debug)]
pub struct Unpacker<'a, T = ()> {
    cursor: Cursor<'a>,
    options: Options,
    trace: T,
}

impl<'a> Unpacker<'a> {
    pub fn new(r: &'a [u8], options: Options) -> Self {
        Self::with_trace(r, options, ())
    }
}

impl<'a, T: Trace> Unpacker<'a, T> {
    pub fn with_trace(r: &'a [u8], options: Options, trace: T) -> Self {
        Self {
            cursor: Cursor::new(r),
            options,
            trace,
        }
    }

    /// Decode the next destination.
    ///
    /// Returns the number of bytes consumed. On error, the position is left
    /// where it was before the call.
    pub fn advance(&mut self, d: &mut dyn Destination) -> Result<usize, Error> {
        let Self {
            cursor,
            options,
            trace,
        } = self;

        let order = options.order;

        unpack_slot(
            d.slot(),
            *options,
            |width| cursor.read_unsigned(width, order).map_err(Error::from),
            trace,
        )
    }

    /// Total bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn into_trace(self) -> T {
        self.trace
    }
}
