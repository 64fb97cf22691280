//! Machine State Definition and Initialization.
//!
//! This module defines the `MachineState` structure, the container for the entire
//! architectural and microarchitectural state. It coordinates the following:
//! 1. **Architectural State:** Program counter, register file, instruction and data stores.
//! 2. **Pipeline Latches:** IF/ID, ID/EX, EX/MEM, MEM/WB and the WB/END forwarding latch.
//! 3. **Timing:** The count of cycles completed so far.
//!
//! A `MachineState` is a plain value: the clock controller derives each cycle's state
//! from the previous one and replaces it wholesale, and snapshots are ordinary clones.

/// Fixed-capacity word stores with bounds-checked access.
pub mod memory;

use serde::Serialize;

use crate::common::{LoadError, NUM_MEMORY, RegisterFile, Word};
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::core::pipeline::traits::PipelineLatch;

pub use self::memory::Memory;

/// Complete state of the machine between two clock edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineState {
    /// Program counter: address of the next instruction to fetch.
    pub pc: Word,
    /// Instruction store.
    pub instr_mem: Memory,
    /// Data store, initialized as a copy of the program image.
    pub data_mem: Memory,
    /// Architectural registers.
    pub regs: RegisterFile,
    /// Number of words in the loaded program image.
    pub num_memory: usize,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// WB/END latch (forwarding only).
    pub wb_end: WbEnd,
    /// Cycles completed so far.
    pub cycles: u64,
}

impl MachineState {
    /// Creates the start-of-simulation state for a program image.
    ///
    /// Registers and the cycle count are zero, every latch is flushed to NOOP,
    /// `pc` is 0, and both stores hold the image from address 0. The data store
    /// starts as a mirror of the instruction store so programs may keep data
    /// words alongside their code.
    ///
    /// # Arguments
    ///
    /// * `image` - Program words in address order.
    ///
    /// # Returns
    ///
    /// The initial state, or `LoadError::TooLarge` if the image does not fit.
    pub fn new(image: &[Word]) -> Result<Self, LoadError> {
        if image.len() > NUM_MEMORY {
            return Err(LoadError::TooLarge {
                len: image.len(),
                capacity: NUM_MEMORY,
            });
        }

        Ok(Self {
            pc: 0,
            instr_mem: Memory::from_image(image),
            data_mem: Memory::from_image(image),
            regs: RegisterFile::new(),
            num_memory: image.len(),
            if_id: IfId::flushed(),
            id_ex: IdEx::flushed(),
            ex_mem: ExMem::flushed(),
            mem_wb: MemWb::flushed(),
            wb_end: WbEnd::flushed(),
            cycles: 0,
        })
    }

    /// Returns the loaded portion of the data store.
    pub fn data_image(&self) -> &[Word] {
        &self.data_mem.as_slice()[..self.num_memory]
    }
}
