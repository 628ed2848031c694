//! I/O-free primitives for decoding words and bitfields.
//!
//! This module is intended for applications that need finer control than the
//! functions in [`crate::avec`] provide, for example decoding a buffer one
//! destination at a time or splitting words read by other means.
//!
//! # Architecture
//!
//! Decoding a destination happens in three steps:
//!
//! - The declared widths of a composite destination are summed and checked
//! against the word widths the decoder accepts. See [`size`].
//!
//! - A word of that width is read from a [`cursor::Cursor`] and assembled in
//! the requested [`order::ByteOrder`]. See [`word`].
//!
//! - The word is split into one value per field, in declaration order. See
//! [`bitfield`].
//!
//! Every step can report what it did to a [`trace::Trace`] sink. Tracing never
//! affects decoded values.

pub mod bitfield;
pub mod cursor;
pub mod order;
pub mod size;
pub mod trace;
pub mod word;
