//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback → (WBEND).
//!
//! 1. **Instruction Flow:** Each latch carries everything the next stage needs, so no stage
//!    ever has to look back more than one latch.
//! 2. **Forwarding Window:** `WbEnd` holds the instruction committed last cycle so Execute can
//!    still bypass from it.
//! 3. **Reset State:** `Default` for every latch is the flushed NOOP form.

use serde::Serialize;

use crate::common::Word;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::NOOP_INSTRUCTION;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IfId {
    /// Fetched instruction word.
    pub instr: Word,
    /// Address of the instruction plus one.
    pub pc_plus1: Word,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdEx {
    /// Decoded instruction word.
    pub instr: Word,
    /// Address of the instruction plus one.
    pub pc_plus1: Word,
    /// Register file value of `field0` read during Decode.
    pub read_reg_a: Word,
    /// Register file value of `field1` read during Decode.
    pub read_reg_b: Word,
    /// Sign-extended `field2`.
    pub offset: Word,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExMem {
    /// Instruction word.
    pub instr: Word,
    /// `offset + pc_plus1`, computed for every instruction.
    pub branch_target: Word,
    /// ALU output: sum, nor, effective address, or `a - b` for BEQ.
    pub alu_result: Word,
    /// Decode-time `field1` value carried for SW.
    pub read_reg_b: Word,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemWb {
    /// Instruction word.
    pub instr: Word,
    /// Value to be written to the register file.
    pub write_data: Word,
}

/// WB/END latch: the instruction committed in the previous cycle.
///
/// The register file has already been written when this latch is filled; it is
/// kept one more cycle purely as a forwarding source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WbEnd {
    /// Instruction word.
    pub instr: Word,
    /// Value that was written to the register file.
    pub write_data: Word,
}

impl PipelineLatch for IfId {
    fn flushed() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
        }
    }
}

impl PipelineLatch for IdEx {
    fn flushed() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
            read_reg_a: 0,
            read_reg_b: 0,
            offset: 0,
        }
    }
}

impl PipelineLatch for ExMem {
    fn flushed() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            branch_target: 0,
            alu_result: 0,
            read_reg_b: 0,
        }
    }
}

impl PipelineLatch for MemWb {
    fn flushed() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

impl PipelineLatch for WbEnd {
    fn flushed() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

impl Default for IfId {
    fn default() -> Self {
        Self::flushed()
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self::flushed()
    }
}

impl Default for ExMem {
    fn default() -> Self {
        Self::flushed()
    }
}

impl Default for MemWb {
    fn default() -> Self {
        Self::flushed()
    }
}

impl Default for WbEnd {
    fn default() -> Self {
        Self::flushed()
    }
}
