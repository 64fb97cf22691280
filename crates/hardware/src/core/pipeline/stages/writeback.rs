//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits ADD/NOR results to register `field2` and LW results to register
//! `field1`, and publishes the committing instruction into WB/END so that the
//! Execute stage can still forward from it next cycle.

use tracing::trace;

use crate::common::reg::Reg;
use crate::common::{SimError, Word};
use crate::core::machine::MachineState;
use crate::core::pipeline::latches::WbEnd;
use crate::isa::Instruction;
use crate::isa::disasm::disassemble;

/// Result of the writeback stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WritebackOutput {
    /// Next WB/END contents.
    pub wb_end: WbEnd,
    /// Register write applied at commit.
    pub reg_write: Option<(Reg, Word)>,
}

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `state` - Machine state at the start of the cycle.
///
/// # Returns
///
/// The WB/END entry and the register write, or an error if the MEM/WB
/// instruction cannot be decoded.
pub fn wb_stage(state: &MachineState) -> Result<WritebackOutput, SimError> {
    let wb = &state.mem_wb;
    let inst = Instruction::decode(wb.instr)?;
    let reg_write = inst.dest().map(|rd| (rd, wb.write_data));

    trace!(instr = %disassemble(wb.instr), ?reg_write, "WB");

    Ok(WritebackOutput {
        wb_end: WbEnd {
            instr: wb.instr,
            write_data: wb.write_data,
        },
        reg_write,
    })
}
