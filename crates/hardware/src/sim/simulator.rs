//! Simulator: the clock controller.
//!
//! This module owns the machine state for the duration of a run. It performs:
//! 1. **Loading:** Builds the initial state from a program image.
//! 2. **Clocking:** Checks for HALT at MEM/WB, then commits one clock edge per step.
//! 3. **Observation:** Exposes snapshots of the state and the collected statistics.
//!
//! The controller is a two-state machine: running, then halted. Once halted the
//! state is frozen and further steps report the final cycle count unchanged.

use tracing::{debug, info};

use crate::common::{LoadError, SimError, Word};
use crate::config::Config;
use crate::core::machine::MachineState;
use crate::core::pipeline::engine::clock_edge;
use crate::isa::Opcode;
use crate::stats::SimStats;

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Cycles completed so far.
    pub cycles: u64,
    /// Whether the machine has halted.
    pub halted: bool,
}

/// Top-level simulator: machine state plus run control.
#[derive(Debug)]
pub struct Simulator {
    state: MachineState,
    halted: bool,
    stats: SimStats,
    config: Config,
}

impl Simulator {
    /// Creates a simulator for a program image.
    ///
    /// # Arguments
    ///
    /// * `image` - Program words in address order.
    /// * `config` - Run configuration.
    ///
    /// # Returns
    ///
    /// The simulator in the running state, or `LoadError::TooLarge`.
    pub fn load(image: &[Word], config: Config) -> Result<Self, LoadError> {
        let state = MachineState::new(image)?;
        debug!(words = image.len(), "machine initialized");
        Ok(Self::from_state(state, config))
    }

    /// Creates a simulator that resumes from an arbitrary state.
    ///
    /// Useful for starting with hand-built latch contents.
    pub fn from_state(state: MachineState, config: Config) -> Self {
        Self {
            state,
            halted: false,
            stats: SimStats::default(),
            config,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// If MEM/WB holds HALT the machine transitions to halted and nothing is
    /// mutated. Otherwise one clock edge is computed from the current state and
    /// committed. After halting, further calls return the same result.
    ///
    /// # Errors
    ///
    /// Any fatal stage error. The state is left as it was before the step.
    pub fn step(&mut self) -> Result<StepResult, SimError> {
        if self.halted {
            return Ok(self.result());
        }

        if Opcode::of(self.state.mem_wb.instr) == Some(Opcode::Halt) {
            self.halted = true;
            info!(cycles = self.state.cycles, "machine halted");
            return Ok(self.result());
        }

        let edge = clock_edge(&self.state)?;
        self.state = edge.next;

        self.stats.cycles = self.state.cycles;
        if edge.events.stalled {
            self.stats.record_stall();
        }
        if edge.events.redirect.is_some() {
            self.stats.record_taken_branch();
        }
        if let Some(op) = edge.events.retired {
            self.stats.record_retire(op);
        }

        Ok(self.result())
    }

    /// Steps until the machine halts.
    ///
    /// Honours `config.general.max_cycles`: if that many cycles complete without
    /// reaching HALT, returns `SimError::CycleLimit`.
    ///
    /// # Returns
    ///
    /// The total number of cycles executed.
    pub fn run(&mut self) -> Result<u64, SimError> {
        loop {
            let result = self.step()?;
            if result.halted {
                return Ok(result.cycles);
            }
            if let Some(limit) = self.config.general.max_cycles.filter(|&l| result.cycles >= l) {
                return Err(SimError::CycleLimit(limit));
            }
        }
    }

    /// Returns a copy of the full machine state.
    pub fn snapshot(&self) -> MachineState {
        self.state.clone()
    }

    /// Borrows the current machine state.
    pub const fn state(&self) -> &MachineState {
        &self.state
    }

    /// Whether the machine has halted.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The run configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    const fn result(&self) -> StepResult {
        StepResult {
            cycles: self.state.cycles,
            halted: self.halted,
        }
    }
}
