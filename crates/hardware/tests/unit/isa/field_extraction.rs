//! Field Extraction Properties.
//!
//! Verifies `InstructionBits` against arbitrary words: fields never leave their
//! ranges, and encoding known fields extracts them back.

use pipesim_core::common::Word;
use pipesim_core::isa::{InstructionBits, Opcode, sign_extend_16};
use proptest::prelude::*;

use crate::common::builder::instruction::InstructionBuilder;

proptest! {
    #[test]
    fn fields_stay_in_range(word in any::<i32>()) {
        prop_assert!(word.field0().index() < 8);
        prop_assert!(word.field1().index() < 8);
        prop_assert!((0..=0xFFFF).contains(&word.field2()));
        prop_assert!((-32768..=32767).contains(&word.offset()));
    }

    #[test]
    fn opcode_is_arithmetic_shift(word in any::<i32>()) {
        prop_assert_eq!(word.opcode_bits(), word >> 22);
        if word < 0 {
            prop_assert!(Opcode::of(word).is_none(), "negative words have negative opcodes");
        }
    }

    #[test]
    fn encoded_fields_extract_back(
        op in 0i32..8,
        f0 in 0u32..8,
        f1 in 0u32..8,
        f2 in -32768i32..=32767,
    ) {
        let word: Word = InstructionBuilder::new()
            .opcode(op)
            .field0(f0)
            .field1(f1)
            .field2(f2)
            .build();
        prop_assert_eq!(word.opcode_bits(), op);
        prop_assert_eq!(word.field0().index(), f0 as usize);
        prop_assert_eq!(word.field1().index(), f1 as usize);
        prop_assert_eq!(word.offset(), f2);
        prop_assert_eq!(Opcode::of(word).map(Opcode::bits), Some(op));
    }

    #[test]
    fn sign_extend_ignores_high_bits(v in any::<i32>()) {
        prop_assert_eq!(sign_extend_16(v), sign_extend_16(v & 0xFFFF));
    }
}

#[test]
fn sign_extend_boundaries() {
    assert_eq!(sign_extend_16(0x7FFF), 32767);
    assert_eq!(sign_extend_16(0x8000), -32768);
    assert_eq!(sign_extend_16(0xFFFF), -1);
    assert_eq!(sign_extend_16(0), 0);
}
