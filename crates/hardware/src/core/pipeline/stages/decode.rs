//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Register Read:** Reads `field0` and `field1` from the register file.
//! 2. **Immediate Extraction:** Sign-extends `field2` into the offset.
//! 3. **Hazard Detection:** Asks the hazard unit whether a load-use stall is needed,
//!    and if so replaces the outgoing ID/EX entry with a bubble.
//!
//! Decode is lenient: it copies whatever word sits in IF/ID, including data words that
//! were fetched past a HALT. Such words are rejected only if they reach the Memory stage.

use tracing::{debug, trace};

use crate::core::machine::MachineState;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::IdEx;
use crate::isa::disasm::disassemble;
use crate::isa::{InstructionBits, NOOP_INSTRUCTION};

/// Result of the decode stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Proposed next ID/EX contents.
    pub id_ex: IdEx,
    /// Whether a load-use stall was detected.
    ///
    /// When set, `id_ex` is already the bubble; the clock controller must also hold
    /// the PC and re-present the current IF/ID instruction.
    pub stall: bool,
}

/// Executes the instruction decode stage of the pipeline.
///
/// On a stall the bubble keeps the register values read for the held instruction
/// but zeroes `pc_plus1` and `offset`.
///
/// # Arguments
///
/// * `state` - Machine state at the start of the cycle.
pub fn decode_stage(state: &MachineState) -> DecodeOutput {
    let if_id = &state.if_id;
    let instr = if_id.instr;

    let mut id_ex = IdEx {
        instr,
        pc_plus1: if_id.pc_plus1,
        read_reg_a: state.regs.read(instr.field0()),
        read_reg_b: state.regs.read(instr.field1()),
        offset: instr.offset(),
    };

    let stall = need_stall_load_use(&state.id_ex, if_id);
    if stall {
        debug!(
            held = %disassemble(instr),
            load = %disassemble(state.id_ex.instr),
            "load-use stall"
        );
        id_ex.instr = NOOP_INSTRUCTION;
        id_ex.pc_plus1 = 0;
        id_ex.offset = 0;
    }

    trace!(instr = %disassemble(id_ex.instr), a = id_ex.read_reg_a, b = id_ex.read_reg_b, stall, "ID");

    DecodeOutput { id_ex, stall }
}
