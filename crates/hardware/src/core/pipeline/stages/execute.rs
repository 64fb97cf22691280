//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Resolution:** Uses the forwarding unit to resolve data hazards.
//! 2. **Arithmetic Execution:** Runs the ALU for ADD, NOR, LW, SW and BEQ.
//! 3. **Target Computation:** Computes `offset + pc_plus1` for every instruction.
//! 4. **Branch Resolution:** Detects a taken BEQ in the current EX/MEM latch and requests
//!    a redirect, which the clock controller turns into a three-latch flush.

use tracing::{debug, trace};

use crate::common::Word;
use crate::core::machine::MachineState;
use crate::core::pipeline::forwarding::{Operands, forward_operands};
use crate::core::pipeline::latches::ExMem;
use crate::core::units::alu::Alu;
use crate::isa::Opcode;
use crate::isa::disasm::disassemble;

/// Result of the execute stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Proposed next EX/MEM contents.
    pub ex_mem: ExMem,
    /// Branch target if the BEQ resolved last cycle was taken.
    pub redirect: Option<Word>,
    /// Operands used, with their forwarding sources.
    pub operands: Operands,
}

/// Executes the instruction execute stage.
///
/// JALR, HALT, NOOP and undefined words produce no ALU result; the previous
/// `alu_result` is carried into the new EX/MEM entry unchanged.
///
/// The redirect is decided from the EX/MEM latch as it stood at the start of the
/// cycle: a BEQ there whose result is zero is taken.
///
/// # Arguments
///
/// * `state` - Machine state at the start of the cycle.
pub fn execute_stage(state: &MachineState) -> ExecuteOutput {
    let id = &state.id_ex;
    let operands = forward_operands(id, &state.ex_mem, &state.mem_wb, &state.wb_end);

    let alu_result = Opcode::of(id.instr)
        .and_then(|op| Alu::execute(op, operands.a, operands.b, id.offset))
        .unwrap_or(state.ex_mem.alu_result);

    let ex_mem = ExMem {
        instr: id.instr,
        branch_target: id.offset.wrapping_add(id.pc_plus1),
        alu_result,
        read_reg_b: id.read_reg_b,
    };

    trace!(
        instr = %disassemble(id.instr),
        a = operands.a,
        a_src = %operands.a_src,
        b = operands.b,
        b_src = %operands.b_src,
        alu = alu_result,
        "EX"
    );

    let resolved = &state.ex_mem;
    let redirect = (Opcode::of(resolved.instr) == Some(Opcode::Beq) && resolved.alu_result == 0)
        .then_some(resolved.branch_target);
    if let Some(target) = redirect {
        debug!(target, "branch taken, flushing IF/ID, ID/EX and EX/MEM");
    }

    ExecuteOutput {
        ex_mem,
        redirect,
        operands,
    }
}
