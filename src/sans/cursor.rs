//! Sequential reader over a byte slice.

use thiserror::Error;

use super::{
    order::ByteOrder,
    word::{Word, WordWidth},
};

/// Fewer bytes remain than a read requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Needed {needed} bytes, but only {remaining} remain.")]
pub struct InsufficientData {
    pub needed: usize,
    pub remaining: usize,
}

/// A read position within a byte slice.
///
/// Reads either succeed in full and advance the position, or fail and leave
/// it unchanged.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Number of bytes read so far.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.r.len() - self.i
    }

    /// Take the next `n` bytes, advancing the position.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], InsufficientData> {
        let r = self
            .i
            .checked_add(n)
            .and_then(|end| self.r.get(self.i..end))
            .ok_or(InsufficientData {
                needed: n,
                remaining: self.remaining(),
            })?;

        self.i += n;
        Ok(r)
    }

    /// Take an exact number of bytes, advancing the position.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], InsufficientData> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    /// Read a word of type `T`, assembled in the given order.
    pub fn read_word<T: Word<From = [u8; N]>, const N: usize>(
        &mut self,
        order: ByteOrder,
    ) -> Result<T, InsufficientData> {
        Ok(T::assemble(self.take()?, order))
    }

    /// Read a word of a width chosen at runtime, widened to a `u64`.
    pub fn read_unsigned(
        &mut self,
        width: WordWidth,
        order: ByteOrder,
    ) -> Result<u64, InsufficientData> {
        Ok(match width {
            WordWidth::W8 => self.read_word::<u8, 1>(order)?.into(),
            WordWidth::W16 => self.read_word::<u16, 2>(order)?.into(),
            WordWidth::W32 => self.read_word::<u32, 4>(order)?.into(),
            WordWidth::W64 => self.read_word::<u64, 8>(order)?,
        })
    }
}
