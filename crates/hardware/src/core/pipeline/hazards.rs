//! Load-Use Hazard Detection.
//!
//! This module implements the hazard unit. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//!
//! Every other data hazard in this pipeline is covered by forwarding
//! (see [`crate::core::pipeline::forwarding`]); only a load followed immediately by
//! a consumer of its destination cannot be bypassed, because the loaded value does
//! not exist until the end of the Memory stage.

use crate::core::pipeline::latches::{IdEx, IfId};
use crate::isa::{InstructionBits, Opcode};

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in IF/ID (about to be decoded)
/// reads the register that the LW in ID/EX (about to execute) is loading.
///
/// Sources checked per consumer:
/// - ADD, NOR, BEQ, SW: `field0` and `field1`
/// - LW: `field0` only (`field1` is its own destination)
/// - JALR, HALT, NOOP and undefined words: never stall
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the potential producer.
/// * `if_id` - The IF/ID latch holding the potential consumer.
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
///
/// # Examples
///
/// ```
/// use pipesim_core::core::pipeline::hazards::need_stall_load_use;
/// use pipesim_core::core::pipeline::latches::{IdEx, IfId};
///
/// // ID/EX: lw 0 1 0   (r1 = mem[r0 + 0])
/// // IF/ID: add 1 1 2  (r2 = r1 + r1)
/// let id_ex = IdEx { instr: 0x0081_0000, ..IdEx::default() };
/// let if_id = IfId { instr: 0x0009_0002, pc_plus1: 2 };
/// assert!(need_stall_load_use(&id_ex, &if_id));
/// ```
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if Opcode::of(id_ex.instr) != Some(Opcode::Lw) {
        return false;
    }

    let load_dest = id_ex.instr.field1();
    let next = if_id.instr;

    match Opcode::of(next) {
        Some(Opcode::Add | Opcode::Nor | Opcode::Beq | Opcode::Sw) => {
            next.field0() == load_dest || next.field1() == load_dest
        }
        Some(Opcode::Lw) => next.field0() == load_dest,
        Some(Opcode::Jalr | Opcode::Halt | Opcode::Noop) | None => false,
    }
}
