//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a sequence of destinations from a
//! slice or reader. Integers are decoded directly. Composite destinations
//! publish their fields through the [`Bitfields`] trait, which can be derived.
//! See the [`Bitfields`](macro@Bitfields) macro for details.

#[cfg(feature = "std")]
pub mod reader;
#[cfg(feature = "std")]
pub mod record;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::unpack as unpack_reader;
#[cfg(feature = "std")]
pub use record::Record;
pub use slice::{Unpacker, unpack as unpack_slice};

pub use crate::sans::{bitfield::Field, order::ByteOrder, size::Composite};

use crate::sans::{
    bitfield::{MAX_FIELDS, split},
    size::{WidthError, composite_width},
    trace::Trace,
    word::WordWidth,
};

/// Settings for a single unpacking call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Byte order of every word in the source.
    pub order: ByteOrder,
    /// Word widths accepted for composite destinations.
    pub composite: Composite,
}

impl Options {
    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            composite: Composite::Word32,
        }
    }

    pub const fn with_composite(self, composite: Composite) -> Self {
        Self { composite, ..self }
    }
}

/// A place to write one decoded value.
pub enum Slot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    /// A composite of bitfields sharing one word.
    Bits(&'a mut dyn Bitfields),
}

/// A value that can be decoded from a source.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`, and by the
/// [`Bitfields`](macro@Bitfields) derive macro.
pub trait Destination {
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! destination {
    ($t:ident, $variant:ident) => {
        impl Destination for $t {
            fn slot(&mut self) -> Slot<'_> {
                Slot::$variant(self)
            }
        }
    };
}

destination!(u8, U8);
destination!(u16, U16);
destination!(u32, U32);
destination!(u64, U64);

/// Derive [`Bitfields`] and [`Destination`] for a struct of bitfields.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `bits(N)` attribute to each field stored in the word, where `N` is
/// its width. Fields take their place in declaration order, and must have type
/// `bool`, `u8`, `u16`, `u32` or `u64` wide enough to hold `N` bits. Fields
/// without the attribute are left untouched.
///
/// ```
/// #[derive(Debug, Default, Bitfields)]
/// struct Status {
///     #[bits(4)]
///     version: u8,
///     #[bits(4)]
///     kind: u8,
///     #[bits(8)]
///     length: u8,
///     #[bits(1)]
///     ready: bool,
///     #[bits(15)]
///     reserved: u16,
/// }
/// ```
#[cfg(feature = "derive")]
pub use bitunpack_derive::Bitfields;

/// Describe and receive the fields of a composite destination.
///
/// See the [`Bitfields`](macro@Bitfields) derive macro for an automatic
/// implementation of this trait.
pub trait Bitfields {
    /// The fields stored in the word, in order.
    fn fields(&self) -> &[Field<'_>];
    /// Set the field at a position in [`Bitfields::fields`].
    fn set_field(&mut self, index: usize, value: u64);
}

/// Sum the declared widths of a composite destination's fields.
///
/// Depends only on the declared widths, never on field values.
pub fn size_in_bits(d: &(impl Bitfields + ?Sized)) -> Result<u64, WidthError> {
    crate::sans::size::size_in_bits(d.fields())
}

/// Decode one slot, reading words with `read`. Returns the bytes consumed.
pub(crate) fn unpack_slot<E: From<WidthError>>(
    slot: Slot<'_>,
    options: Options,
    mut read: impl FnMut(WordWidth) -> Result<u64, E>,
    trace: &mut impl Trace,
) -> Result<usize, E> {
    let width = match slot {
        Slot::U8(x) => {
            *x = read(WordWidth::W8)? as u8;
            WordWidth::W8
        }
        Slot::U16(x) => {
            *x = read(WordWidth::W16)? as u16;
            WordWidth::W16
        }
        Slot::U32(x) => {
            *x = read(WordWidth::W32)? as u32;
            WordWidth::W32
        }
        Slot::U64(x) => {
            *x = read(WordWidth::W64)?;
            WordWidth::W64
        }
        Slot::Bits(d) => {
            let width = composite_width(size_in_bits(&*d)?, options.composite)?;
            let word = read(width)?;

            let mut values = [0; MAX_FIELDS];
            let n = split(word, width, options.order, d.fields(), &mut values, trace)?;

            for (index, value) in values[..n].iter().enumerate() {
                d.set_field(index, *value);
            }

            width
        }
    };

    Ok(width.bytes())
}
