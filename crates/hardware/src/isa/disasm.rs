//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into the `"<mnemonic> f0 f1 f2"` text used by
//! state dumps, trace events and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x0009_0002), "add 1 1 2");
//! assert_eq!(disassemble(0x1c0_0000), "noop 0 0 0");
//! assert_eq!(disassemble(-1), "data 7 7 65535");
//! ```

use crate::common::Word;
use crate::isa::instruction::{InstructionBits, Opcode};

/// Disassembles a word into a human-readable string.
///
/// Fields are printed as raw unsigned values (`field2` in `0..=65535`). Words whose
/// opcode is undefined are printed with the mnemonic `data`, since such words are
/// normally data placed after HALT.
pub fn disassemble(word: Word) -> String {
    let mnemonic = Opcode::of(word).map_or("data", Opcode::mnemonic);
    format!(
        "{} {} {} {}",
        mnemonic,
        word.field0().index(),
        word.field1().index(),
        word.field2()
    )
}
