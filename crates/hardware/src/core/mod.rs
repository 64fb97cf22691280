//! Core processor implementation.
//!
//! This module contains the machine state, the instruction pipeline and the
//! execution units it drives.

/// Machine state: program counter, register file, stores and pipeline latches.
pub mod machine;

/// Instruction pipeline implementation (engine, stages, latches, hazards, forwarding).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::machine::MachineState;
