//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Identifying which kind of access touched an address outside a store.
//! 2. **Tracing:** Labelling store traffic in stage-level trace events.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when an access falls outside the fixed-capacity stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the Fetch stage reads the instruction store at the current pc.
    Fetch,

    /// Data read access.
    ///
    /// Occurs when a load reads the data store in the Memory stage.
    Read,

    /// Data write access.
    ///
    /// Occurs when a store writes the data store in the Memory stage.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
