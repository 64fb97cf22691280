//! Cycle-accurate five-stage pipeline simulator library.
//!
//! This crate simulates a small word-addressed machine with eight registers and an
//! eight-instruction ISA, reproducing per-cycle pipeline state. It provides:
//! 1. **ISA:** Instruction field extraction, strict decoding, and disassembly.
//! 2. **Core:** Machine state, pipeline latches, hazard and forwarding units, stage executors.
//! 3. **Simulation:** Image loader and the clock controller that steps the pipeline to HALT.
//! 4. **Support:** Configuration and statistics collection.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::{Config, Simulator};
//!
//! // add 0 0 1; halt
//! let image = [0x0000_0001, 0x0180_0000];
//! let mut sim = Simulator::load(&image, Config::default()).unwrap();
//! let cycles = sim.run().unwrap();
//! assert_eq!(cycles, 5);
//! ```

/// Common types and constants (words, registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults and JSON-loadable sections).
pub mod config;
/// Processor core (machine state, pipeline, execution units).
pub mod core;
/// Instruction set (opcodes, field extraction, decoding, disassembly).
pub mod isa;
/// Program loading and the clock controller.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Complete machine state; the value returned by `Simulator::snapshot`.
pub use crate::core::MachineState;
/// Clock controller; construct with `Simulator::load`.
pub use crate::sim::Simulator;
