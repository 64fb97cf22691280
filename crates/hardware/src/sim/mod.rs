//! Simulation driver and program loading.
//!
//! Provides the loader for machine-code images and the clock controller that
//! runs them.

/// Machine-code image parsing and file loading.
pub mod loader;

/// Clock controller: stepping, halting and run limits.
pub mod simulator;

pub use self::simulator::{Simulator, StepResult};
