#![no_std]

//! Decode byte buffers into fixed-width integers and bit-packed structs.
//!
//! A buffer is decoded into an ordered list of destinations. Each destination
//! is either an unsigned integer (`u8`, `u16`, `u32` or `u64`), or a composite
//! whose named members occupy a declared number of bits within one word.
//! Members are placed from the least-significant bit for little-endian data,
//! and from the most-significant bit for big-endian data.
//!
//! Most users should begin with the functions and derive macro in the [`avec`]
//! module. If these prove insufficient, the primitives in the [`sans`] module
//! can be used to decode one destination at a time.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the derive macro (default).
//! - `std`: enable the reader-based unpacker and runtime records (default).

pub mod avec;
pub mod sans;
