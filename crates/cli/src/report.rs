//! Text reports in the classic simulator layout.
//!
//! Writes the load listing, the per-cycle state dump and the halt banner. Field
//! names and indentation follow the long-standing course format so existing
//! graders and diff-based test suites keep working.

use std::io::{self, Write};

use pipesim_core::MachineState;
use pipesim_core::common::Word;
use pipesim_core::isa::disasm::disassemble;

/// Writes the words as they are read from the image.
pub fn write_load_listing<W: Write>(out: &mut W, image: &[Word]) -> io::Result<()> {
    for (i, word) in image.iter().enumerate() {
        writeln!(out, "memory[{i}]={word}")?;
    }
    Ok(())
}

/// Writes the disassembled instruction store.
pub fn write_instruction_memory<W: Write>(out: &mut W, image: &[Word]) -> io::Result<()> {
    writeln!(out, "{} memory words", image.len())?;
    writeln!(out, "\tinstruction memory:")?;
    for (i, &word) in image.iter().enumerate() {
        writeln!(out, "\t\tinstrmem[ {i} ] {}", disassemble(word))?;
    }
    Ok(())
}

/// Writes the full machine state as it stands before the next cycle.
pub fn write_state<W: Write>(out: &mut W, state: &MachineState) -> io::Result<()> {
    writeln!(out, "\n@@@\nstate before cycle {} starts", state.cycles)?;
    writeln!(out, "\tpc {}", state.pc)?;

    writeln!(out, "\tdata memory:")?;
    for (i, word) in state.data_image().iter().enumerate() {
        writeln!(out, "\t\tdataMem[ {i} ] {word}")?;
    }

    writeln!(out, "\tregisters:")?;
    for (i, val) in state.regs.as_slice().iter().enumerate() {
        writeln!(out, "\t\treg[ {i} ] {val}")?;
    }

    writeln!(out, "\tIFID:")?;
    writeln!(out, "\t\tinstruction {}", disassemble(state.if_id.instr))?;
    writeln!(out, "\t\tpcPlus1 {}", state.if_id.pc_plus1)?;

    writeln!(out, "\tIDEX:")?;
    writeln!(out, "\t\tinstruction {}", disassemble(state.id_ex.instr))?;
    writeln!(out, "\t\tpcPlus1 {}", state.id_ex.pc_plus1)?;
    writeln!(out, "\t\treadRegA {}", state.id_ex.read_reg_a)?;
    writeln!(out, "\t\treadRegB {}", state.id_ex.read_reg_b)?;
    writeln!(out, "\t\toffset {}", state.id_ex.offset)?;

    writeln!(out, "\tEXMEM:")?;
    writeln!(out, "\t\tinstruction {}", disassemble(state.ex_mem.instr))?;
    writeln!(out, "\t\tbranchTarget {}", state.ex_mem.branch_target)?;
    writeln!(out, "\t\taluResult {}", state.ex_mem.alu_result)?;
    writeln!(out, "\t\treadRegB {}", state.ex_mem.read_reg_b)?;

    writeln!(out, "\tMEMWB:")?;
    writeln!(out, "\t\tinstruction {}", disassemble(state.mem_wb.instr))?;
    writeln!(out, "\t\twriteData {}", state.mem_wb.write_data)?;

    writeln!(out, "\tWBEND:")?;
    writeln!(out, "\t\tinstruction {}", disassemble(state.wb_end.instr))?;
    writeln!(out, "\t\twriteData {}", state.wb_end.write_data)?;
    Ok(())
}

/// Writes the halt banner.
pub fn write_halted<W: Write>(out: &mut W, cycles: u64) -> io::Result<()> {
    writeln!(out, "machine halted")?;
    writeln!(out, "total of {cycles} cycles executed")
}
