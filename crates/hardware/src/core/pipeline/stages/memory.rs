//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It performs:
//! 1. **Loads:** Reads the data store at the effective address for LW.
//! 2. **Stores:** Validates the address and proposes the write for SW.
//! 3. **Pass-Through:** Carries ADD/NOR results to MEM/WB.
//!
//! Everything that reaches this stage will commit, so the instruction is decoded
//! strictly here and malformed words are reported as fatal errors.

use tracing::trace;

use crate::common::{AccessType, SimError, Word};
use crate::core::machine::MachineState;
use crate::core::pipeline::latches::MemWb;
use crate::isa::disasm::disassemble;
use crate::isa::{Instruction, Opcode};

/// Result of the memory stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryOutput {
    /// Proposed next MEM/WB contents.
    pub mem_wb: MemWb,
    /// Pending store as `(address, value)`, applied at commit.
    pub store: Option<(Word, Word)>,
}

/// Executes the memory stage.
///
/// Instructions that produce no write data carry the previous MEM/WB `write_data`.
///
/// # Arguments
///
/// * `state` - Machine state at the start of the cycle.
///
/// # Returns
///
/// The MEM/WB entry and any store, or an error if the EX/MEM instruction is
/// malformed or accesses an address outside the data store.
pub fn mem_stage(state: &MachineState) -> Result<MemoryOutput, SimError> {
    let ex = &state.ex_mem;
    let inst = Instruction::decode(ex.instr)?;

    let mut write_data = state.mem_wb.write_data;
    let mut store = None;

    match inst.opcode {
        Opcode::Add | Opcode::Nor => write_data = ex.alu_result,
        Opcode::Lw => write_data = state.data_mem.read(ex.alu_result, AccessType::Read)?,
        Opcode::Sw => {
            state.data_mem.check_write(ex.alu_result)?;
            store = Some((ex.alu_result, ex.read_reg_b));
        }
        Opcode::Beq | Opcode::Jalr | Opcode::Halt | Opcode::Noop => {}
    }

    trace!(instr = %disassemble(ex.instr), write_data, ?store, "MEM");

    Ok(MemoryOutput {
        mem_wb: MemWb {
            instr: ex.instr,
            write_data,
        },
        store,
    })
}
