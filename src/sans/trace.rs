//! Observation of decode steps.

use core::fmt::Write;

use super::bitfield::Placement;

/// Receive a description of each decode step.
///
/// Tracing never affects decoded values. The default implementation of each
/// method ignores its input, and `()` ignores everything.
#[allow(unused_variables)]
pub trait Trace {
    /// Observe a word read for a composite destination.
    fn word(&mut self, value: u64, bits: u32) {}
    /// Observe a field split from the last word.
    fn field(&mut self, name: &str, bits: u32, placement: Placement, value: u64) {}
}

impl Trace for () {}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn word(&mut self, value: u64, bits: u32) {
        (**self).word(value, bits);
    }

    fn field(&mut self, name: &str, bits: u32, placement: Placement, value: u64) {
        (**self).field(name, bits, placement, value);
    }
}

/// Write each decode step as a line of binary bit patterns.
///
/// A word is written zero-padded to its width, followed by its hexadecimal
/// value. Each field is written as its shifted mask, followed by its name,
/// width, unshifted mask and shift. Write errors are ignored.
#[derive(Debug, Default)]
pub struct Binary<W> {
    w: W,
    bits: u32,
}

impl<W: Write> Binary<W> {
    pub fn new(w: W) -> Self {
        Self { w, bits: 0 }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> Trace for Binary<W> {
    fn word(&mut self, value: u64, bits: u32) {
        self.bits = bits;

        let width = bits as usize;
        let _ = writeln!(self.w, "{value:0width$b} read value ({value:x})");
    }

    fn field(&mut self, name: &str, bits: u32, placement: Placement, _: u64) {
        let Placement { mask, shift } = placement;

        let width = self.bits as usize;
        let _ = writeln!(
            self.w,
            "{:0width$b} {name} bits {bits} mask {mask:b} bitshift {shift}",
            mask << shift,
        );
    }
}
