//! Simulator and Loader Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode Faults:** Why a committing instruction word could not be interpreted.
//! 2. **Simulation Errors:** Fatal conditions raised while clocking the pipeline.
//! 3. **Load Errors:** Failures reading or parsing a program image before any cycle runs.
//!
//! None of these are recoverable mid-simulation: the pipeline is deterministic and total
//! once an image is well-formed, so every error aborts the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Word;
use super::data::AccessType;

/// Reason an instruction word failed strict decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeFault {
    /// The opcode field (`word >> 22`) is outside `0..=7`.
    UndefinedOpcode(i32),

    /// A field used as a register index is outside `0..=7`.
    ///
    /// Only `field2` can trigger this, when it names the destination of ADD or NOR.
    RegisterOutOfRange(i32),
}

impl fmt::Display for DecodeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedOpcode(op) => write!(f, "undefined opcode {op}"),
            Self::RegisterOutOfRange(reg) => write!(f, "register index {reg} out of range"),
        }
    }
}

/// Fatal conditions raised while clocking the pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// An instruction that must take architectural effect could not be decoded.
    #[error("invalid instruction {word} ({word:#010x}): {fault}")]
    InvalidInstruction {
        /// Raw instruction word.
        word: Word,
        /// What was wrong with it.
        fault: DecodeFault,
    },

    /// A fetch, load or store addressed a word outside its store.
    #[error("invalid {access} address {addr}")]
    InvalidAddress {
        /// The offending word address.
        addr: Word,
        /// Which kind of access was attempted.
        access: AccessType,
    },

    /// The runner's cycle budget ran out before the program reached HALT.
    #[error("cycle limit of {0} reached without HALT")]
    CycleLimit(u64),
}

/// Failures reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("can't open file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line does not start with a decimal integer that fits in a word.
    #[error("error in reading address {address}: {text:?}")]
    Parse {
        /// Word address (0-based line number) of the malformed line.
        address: usize,
        /// The offending line, without its terminator.
        text: String,
    },

    /// The image holds more words than the instruction store can take.
    #[error("program of {len} words exceeds the {capacity}-word instruction store")]
    TooLarge {
        /// Number of words in the image.
        len: usize,
        /// Store capacity.
        capacity: usize,
    },
}

/// Failures reading a JSON configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("can't read config {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is not a valid configuration document.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}
