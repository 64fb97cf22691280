//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct and the `Reg` index type. It provides:
//! 1. **Storage:** Eight general-purpose words, all writable (no hardwired zero).
//! 2. **Checked Indexing:** `Reg` can only hold `0..=7`, so reads and writes never leave the file.
//! 3. **Observability:** Iteration over the registers for state dumps.

use std::fmt;

use serde::Serialize;

use super::Word;
use super::constants::NUM_REGS;

/// Index of an architectural register, guaranteed to be in `0..NUM_REGS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Reg(u8);

impl Reg {
    /// Converts a raw field value into a register index.
    ///
    /// # Arguments
    ///
    /// * `raw` - Field value taken from an instruction word.
    ///
    /// # Returns
    ///
    /// `Some(Reg)` if `raw` names one of the eight registers, `None` otherwise.
    #[inline]
    pub const fn new(raw: i32) -> Option<Self> {
        if raw >= 0 && raw < NUM_REGS as i32 {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Builds a register index from a 3-bit field.
    ///
    /// Only the low three bits of `bits` are used, so the result is always valid.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0x7) as u8)
    }

    /// Returns the register number as a `usize` for indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The eight-entry architectural register file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [Word; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to read.
    ///
    /// # Returns
    ///
    /// The word currently stored in `reg`.
    #[inline]
    pub const fn read(&self, reg: Reg) -> Word {
        self.regs[reg.index()]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to write.
    /// * `val` - The word to store.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: Word) {
        self.regs[reg.index()] = val;
    }

    /// Returns all eight register values in index order.
    pub const fn as_slice(&self) -> &[Word; NUM_REGS] {
        &self.regs
    }
}

impl From<[Word; NUM_REGS]> for RegisterFile {
    fn from(regs: [Word; NUM_REGS]) -> Self {
        Self { regs }
    }
}
