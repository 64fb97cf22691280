//! Clock Edge Engine.
//!
//! This module ties the five stage executors together into one clock edge. It performs:
//! 1. **Snapshot Evaluation:** Every stage reads only the previous cycle's `MachineState`.
//! 2. **Control Resolution:** Applies the load-use stall (hold PC, re-present IF/ID) and then
//!    the taken-branch redirect (flush IF/ID, ID/EX, EX/MEM), which takes precedence.
//! 3. **Atomic Commit:** Builds the complete next state as a new value; the caller swaps it in.
//!
//! Halt detection is not part of the edge; it belongs to the clock controller in
//! [`crate::sim::simulator`], which checks MEM/WB before asking for the next edge.

use crate::common::{SimError, Word};
use crate::core::machine::MachineState;
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Opcode;

/// Control events observed during one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleEvents {
    /// A load-use stall held the PC this cycle.
    ///
    /// Not set when a taken branch redirected in the same cycle, since the
    /// redirect discards the held instruction and the stall costs nothing.
    pub stalled: bool,
    /// A taken branch redirected the PC to this target.
    pub redirect: Option<Word>,
    /// Operation of the instruction that left writeback, if it was not a NOOP.
    pub retired: Option<Opcode>,
}

/// The outcome of one clock edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockEdge {
    /// State at the start of the next cycle.
    pub next: MachineState,
    /// What happened along the way.
    pub events: CycleEvents,
}

/// Computes the machine state one cycle after `prev`.
///
/// `prev` is never modified. All five stages are evaluated against it before any
/// of their outputs are combined, so no stage can observe another stage's result
/// from the same cycle.
///
/// # Arguments
///
/// * `prev` - State at the start of the cycle.
///
/// # Returns
///
/// The next state and the cycle's control events, or the first fatal error raised
/// by a stage. On error nothing is committed.
pub fn clock_edge(prev: &MachineState) -> Result<ClockEdge, SimError> {
    let fetch = fetch_stage(prev)?;
    let decode = decode_stage(prev);
    let execute = execute_stage(prev);
    let memory = mem_stage(prev)?;
    let writeback = wb_stage(prev)?;

    let mut next = prev.clone();
    next.cycles += 1;

    next.pc = fetch.next_pc;
    next.if_id = fetch.if_id;
    next.id_ex = decode.id_ex;
    next.ex_mem = execute.ex_mem;
    next.mem_wb = memory.mem_wb;
    next.wb_end = writeback.wb_end;

    if decode.stall {
        next.pc = prev.pc;
        next.if_id = IfId {
            instr: prev.if_id.instr,
            pc_plus1: prev.pc,
        };
    }

    if let Some(target) = execute.redirect {
        next.if_id.flush();
        next.id_ex.flush();
        next.ex_mem.flush();
        next.pc = target;
    }

    if let Some((addr, val)) = memory.store {
        next.data_mem.write(addr, val)?;
    }
    if let Some((rd, val)) = writeback.reg_write {
        next.regs.write(rd, val);
    }

    let events = CycleEvents {
        stalled: decode.stall && execute.redirect.is_none(),
        redirect: execute.redirect,
        retired: Opcode::of(prev.mem_wb.instr).filter(|&op| op != Opcode::Noop),
    };

    Ok(ClockEdge { next, events })
}
