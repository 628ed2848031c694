//! Field descriptors and the splitting of words into bitfields.

use super::{order::ByteOrder, size::WidthError, trace::Trace, word::WordWidth};

/// The most fields a single word can hold, and the room `split` needs.
pub const MAX_FIELDS: usize = u64::BITS as usize;

/// A named field and its declared width tag.
///
/// The tag is kept as written so that malformed widths from runtime schemas
/// can be reported rather than rejected on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<'a> {
    pub name: &'a str,
    pub tag: Option<&'a str>,
}

impl<'a> Field<'a> {
    pub const fn new(name: &'a str, tag: &'a str) -> Self {
        Self {
            name,
            tag: Some(tag),
        }
    }

    pub const fn untagged(name: &'a str) -> Self {
        Self { name, tag: None }
    }

    /// The declared width, if the tag holds a positive integer.
    pub fn bits(&self) -> Option<u32> {
        self.tag?.parse::<u32>().ok().filter(|bits| *bits != 0)
    }
}

/// Location of a field within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Unshifted mask covering the field's width.
    pub mask: u64,
    /// Distance of the field's lowest bit from bit 0.
    pub shift: u32,
}

impl Placement {
    /// Place a field of `bits` width following `offset` bits of earlier fields.
    ///
    /// Little-endian words fill from the least-significant bit, and big-endian
    /// words from the most-significant bit. Requires `0 < bits` and
    /// `offset + bits <= width`.
    pub fn new(bits: u32, offset: u32, width: WordWidth, order: ByteOrder) -> Self {
        let mask = u64::MAX >> (u64::BITS - bits);

        let shift = match order {
            ByteOrder::LittleEndian => offset,
            ByteOrder::BigEndian => width.bits() - offset - bits,
        };

        Self { mask, shift }
    }

    pub fn extract(self, word: u64) -> u64 {
        (word & (self.mask << self.shift)) >> self.shift
    }
}

/// Split a word into one value per field, in field order.
///
/// Every field is checked before its value is written, and an error is
/// returned for the first field whose tag is malformed or which runs past the
/// end of the word. Returns the number of values written to the front of
/// `values`.
pub fn split(
    word: u64,
    width: WordWidth,
    order: ByteOrder,
    fields: &[Field],
    values: &mut [u64; MAX_FIELDS],
    trace: &mut impl Trace,
) -> Result<usize, WidthError> {
    trace.word(word, width.bits());

    let mut offset = 0u32;

    for (index, field) in fields.iter().enumerate() {
        let bits = field.bits().ok_or(WidthError::MalformedWidthTag { index })?;

        let end = u64::from(offset) + u64::from(bits);
        if end > u64::from(width.bits()) {
            Err(WidthError::InvalidBitWidth(end))?
        }

        // Each field holds at least one bit, so a word never has more than
        // `MAX_FIELDS` of them.
        let Some(value) = values.get_mut(index) else {
            return Err(WidthError::InvalidBitWidth(end));
        };

        let placement = Placement::new(bits, offset, width, order);
        *value = placement.extract(word);

        trace.field(field.name, bits, placement, *value);

        offset += bits;
    }

    Ok(fields.len())
}
