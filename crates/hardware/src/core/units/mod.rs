//! Execution units and functional components.
//!
//! The pipeline has a single functional unit, the integer ALU used by Execute.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
