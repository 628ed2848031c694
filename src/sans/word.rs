//! Assembly of fixed-width unsigned words.

use zerocopy::byteorder::{BE, LE, U16, U32, U64};

use super::order::ByteOrder;

/// An unsigned integer assembled from a fixed number of bytes.
pub trait Word: Copy + Into<u64> {
    /// The bytes storing this word.
    type From;

    /// Assemble a word from its bytes in the given order.
    fn assemble(r: Self::From, order: ByteOrder) -> Self;
}

impl Word for u8 {
    type From = [u8; 1];

    fn assemble(r: Self::From, _: ByteOrder) -> Self {
        r[0]
    }
}

macro_rules! word {
    ($t:ident, $z:ident) => {
        impl Word for $t {
            type From = [u8; size_of::<$t>()];

            fn assemble(r: Self::From, order: ByteOrder) -> Self {
                match order {
                    ByteOrder::LittleEndian => $z::<LE>::from_bytes(r).get(),
                    ByteOrder::BigEndian => $z::<BE>::from_bytes(r).get(),
                }
            }
        }
    };
}

word!(u16, U16);
word!(u32, U32);
word!(u64, U64);

/// Width of a word the decoder can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    W8,
    W16,
    W32,
    W64,
}

impl WordWidth {
    /// The word width matching a number of bits, if any.
    pub const fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => u8::BITS,
            Self::W16 => u16::BITS,
            Self::W32 => u32::BITS,
            Self::W64 => u64::BITS,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}
