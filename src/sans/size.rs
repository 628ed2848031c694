//! Summing and validating declared bit widths.

use thiserror::Error;

use super::{bitfield::Field, word::WordWidth};

/// An error in the declared widths of a composite destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidthError {
    /// A field's width tag is missing or not a positive integer.
    #[error("Field {index} has a missing or malformed bit width.")]
    MalformedWidthTag { index: usize },
    /// The total width is zero or not a whole number of bytes.
    #[error("Total width ({0} bits) is not a whole number of bytes.")]
    InvalidBitWidth(u64),
    /// The total width is a whole number of bytes, but cannot be decoded.
    #[error("Total width ({0} bits) is not supported.")]
    UnsupportedWidth(u64),
}

/// Word widths accepted for composite destinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Composite {
    /// Only 32-bit composites (default).
    #[default]
    Word32,
    /// Composites of 8, 16, 32 or 64 bits.
    AnyWord,
}

/// Sum the declared widths of a list of fields.
///
/// The sum is not checked against any word width. See [`composite_width`].
/// Widths are summed as `u64`, so totals beyond `u32::MAX` are kept exact.
pub fn size_in_bits(fields: &[Field]) -> Result<u64, WidthError> {
    fields
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (index, field)| {
            let bits = field.bits().ok_or(WidthError::MalformedWidthTag { index })?;
            Ok(acc + u64::from(bits))
        })
}

/// Select the word to read for a composite of a total width.
pub fn composite_width(bits: u64, composite: Composite) -> Result<WordWidth, WidthError> {
    if bits % 8 != 0 || bits < 8 {
        Err(WidthError::InvalidBitWidth(bits))?
    }

    let width = match composite {
        Composite::Word32 => WordWidth::from_bits(bits).filter(|w| *w == WordWidth::W32),
        Composite::AnyWord => WordWidth::from_bits(bits),
    };

    width.ok_or(WidthError::UnsupportedWidth(bits))
}
