//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Reads the instruction at the PC into IF/ID.
//! 2. **Decode:** Reads the register file into ID/EX and detects load-use stalls.
//! 3. **Execute:** Forwards operands, runs the ALU and resolves taken branches.
//! 4. **Memory:** Performs loads and stores.
//! 5. **Writeback:** Commits results to the register file and publishes WB/END.
//!
//! Every stage is a pure function of the previous cycle's `MachineState`. Stages never
//! observe each other's outputs within a cycle; the clock controller combines the
//! returned outputs into the next state in a single commit.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{DecodeOutput, decode_stage};
/// Execute stage entry point (EX stage).
pub use execute::{ExecuteOutput, execute_stage};
/// Fetch stage entry point (IF stage).
pub use fetch::{FetchOutput, fetch_stage};
/// Memory stage entry point (MEM stage).
pub use memory::{MemoryOutput, mem_stage};
/// Writeback stage entry point (WB stage).
pub use writeback::{WritebackOutput, wb_stage};
