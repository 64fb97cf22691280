//! Opcode Table.
//!
//! Defines the values of the top-of-word opcode field.

use crate::common::Word;

/// Register-register add: `reg[field2] = regA + regB`.
pub const OP_ADD: i32 = 0;

/// Register-register nor: `reg[field2] = !(regA | regB)`.
pub const OP_NOR: i32 = 1;

/// Load word: `reg[field1] = mem[regA + offset]`.
pub const OP_LW: i32 = 2;

/// Store word: `mem[regA + offset] = regB`.
pub const OP_SW: i32 = 3;

/// Branch if equal: `if regA == regB { pc = pc + 1 + offset }`.
pub const OP_BEQ: i32 = 4;

/// Jump and link register. Reserved: decoded but has no effect in this machine.
pub const OP_JALR: i32 = 5;

/// Stop the machine once it reaches the writeback boundary.
pub const OP_HALT: i32 = 6;

/// No operation.
pub const OP_NOOP: i32 = 7;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 22;

/// The canonical NOOP word (opcode 7, all other fields zero).
///
/// Every pipeline latch is reset to this word, and flushes and stalls insert it.
pub const NOOP_INSTRUCTION: Word = OP_NOOP << OPCODE_SHIFT;
