//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** One clock edge: all stages evaluated against the same snapshot, then committed.
//! 2. **Forwarding:** The bypass network feeding Execute from EX/MEM, MEM/WB and WB/END.
//! 3. **Hazards:** Detection of load-use hazards that need a stall.
//! 4. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 6. **Traits:** Common interface for pipeline latches.

/// Clock edge evaluation and commit.
pub mod engine;

/// Operand forwarding (bypass) unit.
pub mod forwarding;

/// Load-use hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB, WB/END).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
