//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the fixed-field instruction codec and a disassembler
//! for the eight-instruction, eight-register machine.
//!
//! # Word Layout
//!
//! | bits   | field    | use                                                    |
//! |--------|----------|--------------------------------------------------------|
//! | 31..22 | `opcode` | ADD=0 NOR=1 LW=2 SW=3 BEQ=4 JALR=5 HALT=6 NOOP=7       |
//! | 21..19 | `field0` | regA                                                   |
//! | 18..16 | `field1` | regB (LW destination)                                  |
//! | 15..0  | `field2` | signed offset (LW/SW/BEQ) or destination (ADD/NOR)     |

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode values and the canonical NOOP encoding.
pub mod opcodes;

pub use instruction::{Instruction, InstructionBits, Opcode, sign_extend_16};
pub use opcodes::NOOP_INSTRUCTION;
