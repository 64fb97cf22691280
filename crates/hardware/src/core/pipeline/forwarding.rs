//! Operand Forwarding (Bypass Network).
//!
//! This module implements the forwarding unit. It provides:
//! 1. **Operand Forwarding:** Resolves read-after-write hazards by bypassing the register file.
//! 2. **Priority Ordering:** The nearest in-flight producer wins when several target one register.
//! 3. **Source Tracking:** Reports which latch supplied each operand, for tracing.

use std::fmt;

use crate::common::Word;
use crate::common::reg::Reg;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb, WbEnd};
use crate::isa::{InstructionBits, Opcode};

/// Where an Execute operand came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// The value read from the register file during Decode.
    RegFile,
    /// WB/END write data (instruction committed last cycle).
    WbEnd,
    /// MEM/WB write data (instruction committing this cycle).
    MemWb,
    /// EX/MEM ALU result (instruction one stage ahead).
    ExMem,
}

impl fmt::Display for ForwardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegFile => write!(f, "RegFile"),
            Self::WbEnd => write!(f, "WBEND"),
            Self::MemWb => write!(f, "MEMWB"),
            Self::ExMem => write!(f, "EXMEM"),
        }
    }
}

/// Operands selected for the instruction in ID/EX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operands {
    /// Value for `field0` (regA).
    pub a: Word,
    /// Value for `field1` (regB).
    pub b: Word,
    /// Supplier of `a`.
    pub a_src: ForwardSource,
    /// Supplier of `b`.
    pub b_src: ForwardSource,
}

/// Register written by a committing or committed instruction, if any.
///
/// ADD/NOR name their destination in `field2`, which may be out of range for a
/// malformed word; such a destination simply never matches a source register.
fn result_dest(instr: Word) -> Option<i32> {
    match Opcode::of(instr) {
        Some(Opcode::Add | Opcode::Nor) => Some(instr.field2()),
        Some(Opcode::Lw) => Some(instr.field1().index() as i32),
        _ => None,
    }
}

/// Register written by an instruction whose ALU result is already known in EX/MEM.
///
/// Loads are excluded: their value is not available until the Memory stage finishes.
fn alu_dest(instr: Word) -> Option<i32> {
    match Opcode::of(instr) {
        Some(Opcode::Add | Opcode::Nor) => Some(instr.field2()),
        _ => None,
    }
}

#[inline]
fn targets(dest: Option<i32>, src: Reg) -> bool {
    dest == Some(src.index() as i32)
}

/// Forwards register values from later pipeline stages to the Execute stage.
///
/// Starts from the Decode-time register reads in `id_entry` and overrides them in
/// increasing priority: WB/END, then MEM/WB, then EX/MEM. Later checks win, so
/// the most recently issued producer supplies the value.
///
/// JALR, HALT, NOOP and undefined words are not forwarded to; their latch values are
/// returned unchanged.
///
/// # Arguments
///
/// * `id_entry` - The ID/EX entry requiring operands.
/// * `ex_mem` - The EX/MEM latch (one instruction ahead).
/// * `mem_wb` - The MEM/WB latch (two instructions ahead).
/// * `wb_end` - The WB/END latch (three instructions ahead, already committed).
///
/// # Returns
///
/// The selected operands and where each came from.
pub fn forward_operands(id_entry: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb, wb_end: &WbEnd) -> Operands {
    let mut ops = Operands {
        a: id_entry.read_reg_a,
        b: id_entry.read_reg_b,
        a_src: ForwardSource::RegFile,
        b_src: ForwardSource::RegFile,
    };

    if !Opcode::of(id_entry.instr).is_some_and(Opcode::reads_operands) {
        return ops;
    }

    let reg_a = id_entry.instr.field0();
    let reg_b = id_entry.instr.field1();

    let producers = [
        (result_dest(wb_end.instr), wb_end.write_data, ForwardSource::WbEnd),
        (result_dest(mem_wb.instr), mem_wb.write_data, ForwardSource::MemWb),
        (alu_dest(ex_mem.instr), ex_mem.alu_result, ForwardSource::ExMem),
    ];

    for (dest, val, src) in producers {
        if targets(dest, reg_a) {
            ops.a = val;
            ops.a_src = src;
        }
        if targets(dest, reg_b) {
            ops.b = val;
            ops.b_src = src;
        }
    }

    ops
}
