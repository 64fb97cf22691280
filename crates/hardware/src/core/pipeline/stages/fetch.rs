//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the current Program Counter (PC) from the instruction
//! store and proposes `pc + 1` as the next PC. Stalls and taken branches
//! override the proposal in the clock controller.

use tracing::trace;

use crate::common::{AccessType, SimError, Word};
use crate::core::machine::MachineState;
use crate::core::pipeline::latches::IfId;
use crate::isa::disasm::disassemble;

/// Result of the fetch stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOutput {
    /// Proposed next IF/ID contents.
    pub if_id: IfId,
    /// Proposed next PC.
    pub next_pc: Word,
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `state` - Machine state at the start of the cycle.
///
/// # Returns
///
/// The fetched IF/ID entry and `pc + 1`, or `SimError::InvalidAddress` if the PC
/// lies outside the instruction store.
pub fn fetch_stage(state: &MachineState) -> Result<FetchOutput, SimError> {
    let instr = state.instr_mem.read(state.pc, AccessType::Fetch)?;
    let next_pc = state.pc.wrapping_add(1);

    trace!(pc = state.pc, instr = %disassemble(instr), "IF");

    Ok(FetchOutput {
        if_id: IfId {
            instr,
            pc_plus1: next_pc,
        },
        next_pc,
    })
}
