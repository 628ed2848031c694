//! Byte order of multi-byte words.

/// Convention for assembling a word from consecutive bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    LittleEndian,
    /// Most-significant byte first.
    BigEndian,
}
