//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Word Type:** The 32-bit signed machine word carried by every register, latch and store.
//! 2. **Constants:** Store capacities and register counts fixed by the machine.
//! 3. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 4. **Error Handling:** Decode faults, address faults, loader and configuration errors.
//! 5. **Register Management:** The eight-entry architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for decoding, memory access and program loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_MEMORY, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, DecodeFault, LoadError, SimError};
pub use reg::RegisterFile;

/// A machine word.
///
/// Every architectural value (register, memory cell, latch field, program counter)
/// is a two's-complement 32-bit integer. Arithmetic on words wraps.
pub type Word = i32;
