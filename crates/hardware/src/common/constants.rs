//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Capacity of the instruction and data stores.
//! 2. **Register Constants:** Size of the architectural register file.

/// Number of words in each of the instruction and data stores.
pub const NUM_MEMORY: usize = 65536;

/// Number of architectural registers.
///
/// All eight are general purpose; there is no hardwired zero register.
pub const NUM_REGS: usize = 8;
