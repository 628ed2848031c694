#![cfg(feature = "std")]

use std::collections::BTreeSet;

use bitunpack::avec::{ByteOrder, Record, size_in_bits, unpack_slice};
use proptest::prelude::*;
use tartan_bitfield::bitfield;

/// Widths of the fields between sorted cut points of a 32-bit word.
fn widths(cuts: &BTreeSet<u32>) -> Vec<u32> {
    let mut bounds = vec![0];
    bounds.extend(cuts.iter().copied());
    bounds.push(32);

    bounds.windows(2).map(|w| w[1] - w[0]).collect()
}

fn schema(widths: &[u32]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| format!("f{i}:{w}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn decode(word: u32, order: ByteOrder, schema: &str) -> Vec<u64> {
    let bytes = match order {
        ByteOrder::LittleEndian => word.to_le_bytes(),
        ByteOrder::BigEndian => word.to_be_bytes(),
    };

    let mut record = Record::parse(schema).unwrap();
    assert_eq!(unpack_slice(&bytes, order, &mut [&mut record]), Ok(4));

    record.iter().map(|(_, value)| value).collect()
}

proptest! {
    #[test]
    fn prop_little_endian_reconstructs(
        word in any::<u32>(),
        cuts in prop::collection::btree_set(1u32..32, 0..12),
    ) {
        let widths = widths(&cuts);
        let values = decode(word, ByteOrder::LittleEndian, &schema(&widths));

        let mut shift = 0u32;
        let mut rebuilt = 0u64;
        for (value, width) in values.iter().zip(&widths) {
            prop_assert!(*value < 1u64 << width);
            rebuilt |= value << shift;
            shift += width;
        }

        prop_assert_eq!(rebuilt, u64::from(word));
    }

    #[test]
    fn prop_big_endian_reconstructs(
        word in any::<u32>(),
        cuts in prop::collection::btree_set(1u32..32, 0..12),
    ) {
        let widths = widths(&cuts);
        let values = decode(word, ByteOrder::BigEndian, &schema(&widths));

        let mut used = 0u32;
        let mut rebuilt = 0u64;
        for (value, width) in values.iter().zip(&widths) {
            used += width;
            rebuilt |= value << (32 - used);
        }

        prop_assert_eq!(rebuilt, u64::from(word));
    }

    #[test]
    fn prop_size_ignores_values(
        bytes in any::<[u8; 4]>(),
        cuts in prop::collection::btree_set(1u32..32, 0..12),
    ) {
        let schema = schema(&widths(&cuts));
        let mut record = Record::parse(&schema).unwrap();

        let before = size_in_bits(&record);
        unpack_slice(&bytes, ByteOrder::LittleEndian, &mut [&mut record]).unwrap();

        prop_assert_eq!(before, Ok(32));
        prop_assert_eq!(size_in_bits(&record), before);
    }

    #[test]
    fn prop_integers_consume_their_width(
        bytes in prop::collection::vec(any::<u8>(), 8..32),
    ) {
        let (mut a, mut b, mut c) = (0u8, 0u16, 0u32);

        let n = unpack_slice(&bytes, ByteOrder::BigEndian, &mut [&mut a, &mut b, &mut c]).unwrap();

        prop_assert_eq!(n, 7);
        prop_assert_eq!(a, bytes[0]);
        prop_assert_eq!(b, u16::from_be_bytes([bytes[1], bytes[2]]));
        prop_assert_eq!(c, u32::from_be_bytes([bytes[3], bytes[4], bytes[5], bytes[6]]));

        let mut d = 0u8;
        unpack_slice(&bytes[n..], ByteOrder::BigEndian, &mut [&mut d]).unwrap();
        prop_assert_eq!(d, bytes[7]);
    }

    #[test]
    fn prop_matches_tartan_bitfield(word in any::<u32>()) {
        bitfield! {
            struct Packed(u32) {
                [0..4] a: u8,
                [4..8] b: u8,
                [8..16] c: u8,
                [16..32] pad: u16,
            }
        }

        let packed = Packed(word);
        let values = decode(word, ByteOrder::LittleEndian, "a:4; b:4; c:8; pad:16");

        prop_assert_eq!(
            values,
            vec![
                u64::from(packed.a()),
                u64::from(packed.b()),
                u64::from(packed.c()),
                u64::from(packed.pad()),
            ]
        );
    }
}
