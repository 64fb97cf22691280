//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, other).
//! 3. **Hazards:** Load-use stall cycles, taken branches, and control-flush cycles.

use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::isa::Opcode;

/// Cycles a taken branch adds over straight-line execution.
///
/// The redirect squashes IF/ID, ID/EX and EX/MEM, so three slots that would
/// otherwise have retired are lost.
pub const TAKEN_BRANCH_PENALTY: u64 = 3;

/// Simulation statistics structure tracking all performance metrics.
///
/// Collected by the clock controller as a side channel; never consulted by the
/// pipeline itself.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed at writeback, excluding NOOP bubbles.
    pub instructions_retired: u64,

    /// Count of ADD and NOR instructions retired.
    pub inst_alu: u64,
    /// Count of LW instructions retired.
    pub inst_load: u64,
    /// Count of SW instructions retired.
    pub inst_store: u64,
    /// Count of BEQ instructions retired.
    pub inst_branch: u64,
    /// Count of JALR instructions retired (HALT never reaches writeback).
    pub inst_other: u64,

    /// Stall cycles due to load-use hazards.
    pub stalls_data: u64,
    /// Number of taken branches.
    pub branches_taken: u64,
    /// Cycles lost to taken-branch flushes.
    pub stalls_control: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_other: 0,
            stalls_data: 0,
            branches_taken: 0,
            stalls_control: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`, `"instruction_mix"`.
/// Pass an empty slice to `SimStats::write_sections` to write all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "instruction_mix"];

impl SimStats {
    /// Records one instruction leaving the writeback stage.
    ///
    /// NOOP bubbles are not counted. HALT never leaves writeback, so it is ignored here too.
    pub const fn record_retire(&mut self, opcode: Opcode) {
        match opcode {
            Opcode::Add | Opcode::Nor => self.inst_alu += 1,
            Opcode::Lw => self.inst_load += 1,
            Opcode::Sw => self.inst_store += 1,
            Opcode::Beq => self.inst_branch += 1,
            Opcode::Jalr => self.inst_other += 1,
            Opcode::Halt | Opcode::Noop => return,
        }
        self.instructions_retired += 1;
    }

    /// Records one load-use stall cycle.
    pub const fn record_stall(&mut self) {
        self.stalls_data += 1;
    }

    /// Records a taken branch and the cycles its flush costs.
    pub const fn record_taken_branch(&mut self) {
        self.branches_taken += 1;
        self.stalls_control += TAKEN_BRANCH_PENALTY;
    }

    /// Writes the requested statistics sections to `out`.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"pipeline"`, or
    /// `"instruction_mix"`. Pass an empty slice to write all sections.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination writer.
    /// * `sections` - Slice of section names to write, or empty for all.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_sections<W: Write>(&self, out: &mut W, sections: &[String]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        writeln!(out, "\n==========================================================")?;
        writeln!(out, "PIPELINE SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(
                out,
                "sim_ipc                  {:.4}",
                self.instructions_retired as f64 / cyc
            )?;
            writeln!(out, "sim_cpi                  {:.4}", self.cycles as f64 / instr)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("pipeline") {
            writeln!(out, "PIPELINE HAZARDS")?;
            writeln!(
                out,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            )?;
            writeln!(
                out,
                "  stalls.control         {} ({:.2}%)",
                self.stalls_control,
                pct(self.stalls_control, cyc)
            )?;
            writeln!(out, "  branches.taken         {}", self.branches_taken)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.other", self.inst_other),
            ] {
                writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count, instr))?;
            }
        }
        writeln!(out, "==========================================================")?;
        Ok(())
    }
}
