//! Machine state builder.
//!
//! Starts from the reset state for an image and overrides registers, PC and
//! individual latches, so stage functions can be tested against exact inputs.

use pipesim_core::MachineState;
use pipesim_core::common::Word;
use pipesim_core::common::reg::Reg;
use pipesim_core::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};

pub struct StateBuilder(MachineState);

impl StateBuilder {
    pub fn new(image: &[Word]) -> Self {
        Self(MachineState::new(image).unwrap())
    }

    pub fn pc(mut self, pc: Word) -> Self {
        self.0.pc = pc;
        self
    }

    pub fn reg(mut self, reg: i32, val: Word) -> Self {
        self.0.regs.write(Reg::new(reg).unwrap(), val);
        self
    }

    pub fn data(mut self, addr: Word, val: Word) -> Self {
        self.0.data_mem.write(addr, val).unwrap();
        self
    }

    pub fn if_id(mut self, instr: Word, pc_plus1: Word) -> Self {
        self.0.if_id = IfId { instr, pc_plus1 };
        self
    }

    pub fn id_ex(mut self, id_ex: IdEx) -> Self {
        self.0.id_ex = id_ex;
        self
    }

    pub fn ex_mem(mut self, ex_mem: ExMem) -> Self {
        self.0.ex_mem = ex_mem;
        self
    }

    pub fn mem_wb(mut self, instr: Word, write_data: Word) -> Self {
        self.0.mem_wb = MemWb { instr, write_data };
        self
    }

    pub fn wb_end(mut self, instr: Word, write_data: Word) -> Self {
        self.0.wb_end = WbEnd { instr, write_data };
        self
    }

    pub fn build(self) -> MachineState {
        self.0
    }
}

/// ID/EX entry for `instr` with the given register reads.
pub fn id_ex(instr: Word, read_reg_a: Word, read_reg_b: Word) -> IdEx {
    use pipesim_core::isa::InstructionBits;
    IdEx {
        instr,
        pc_plus1: 0,
        read_reg_a,
        read_reg_b,
        offset: instr.offset(),
    }
}

/// EX/MEM entry for `instr` with the given ALU result.
pub fn ex_mem(instr: Word, alu_result: Word) -> ExMem {
    ExMem {
        instr,
        branch_target: 0,
        alu_result,
        read_reg_b: 0,
    }
}
