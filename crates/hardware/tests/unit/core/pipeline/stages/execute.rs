//! Execute Stage Unit Tests.
//!
//! Verifies that `execute_stage` correctly performs:
//!   1. ALU dispatch with forwarded operands
//!   2. Branch target computation for every instruction
//!   3. Carry-over of the previous ALU result for non-ALU instructions
//!   4. Taken-branch detection from the current EX/MEM latch

use pipesim_core::core::pipeline::forwarding::ForwardSource;
use pipesim_core::core::pipeline::latches::{ExMem, IdEx};
use pipesim_core::core::pipeline::stages::execute_stage;

use crate::common::builder::instruction::{add, beq, halt, lw, noop, nor, sw};
use crate::common::builder::pipeline_state::{StateBuilder, ex_mem, id_ex};

// ══════════════════════════════════════════════════════════
// 1. ALU dispatch
// ══════════════════════════════════════════════════════════

#[test]
fn add_uses_latch_operands() {
    let state = StateBuilder::new(&[halt()]).id_ex(id_ex(add(1, 2, 3), 4, 5)).build();
    let out = execute_stage(&state);
    assert_eq!(out.ex_mem.alu_result, 9);
    assert_eq!(out.ex_mem.instr, add(1, 2, 3));
}

#[test]
fn nor_of_operands() {
    let state = StateBuilder::new(&[halt()]).id_ex(id_ex(nor(1, 2, 3), 1, 2)).build();
    assert_eq!(execute_stage(&state).ex_mem.alu_result, !3);
}

#[test]
fn memory_ops_compute_effective_address() {
    let state = StateBuilder::new(&[halt()]).id_ex(id_ex(lw(1, 2, 7), 100, 0)).build();
    assert_eq!(execute_stage(&state).ex_mem.alu_result, 107);

    let state = StateBuilder::new(&[halt()]).id_ex(id_ex(sw(1, 2, -1), 100, 55)).build();
    let out = execute_stage(&state);
    assert_eq!(out.ex_mem.alu_result, 99);
    assert_eq!(out.ex_mem.read_reg_b, 55, "store value travels in read_reg_b");
}

#[test]
fn alu_uses_forwarded_operand() {
    let state = StateBuilder::new(&[halt()])
        .id_ex(id_ex(add(1, 2, 3), 0, 5))
        .ex_mem(ex_mem(add(0, 0, 1), 40))
        .build();
    let out = execute_stage(&state);
    assert_eq!(out.ex_mem.alu_result, 45);
    assert_eq!(out.operands.a_src, ForwardSource::ExMem);
}

#[test]
fn store_value_is_not_forwarded_into_latch() {
    // read_reg_b is copied from ID/EX as read at decode.
    let state = StateBuilder::new(&[halt()])
        .id_ex(id_ex(sw(0, 2, 0), 0, 5))
        .ex_mem(ex_mem(add(0, 0, 2), 40))
        .build();
    let out = execute_stage(&state);
    assert_eq!(out.operands.b, 40);
    assert_eq!(out.ex_mem.read_reg_b, 5);
}

// ══════════════════════════════════════════════════════════
// 2. Branch target and carry-over
// ══════════════════════════════════════════════════════════

#[test]
fn branch_target_computed_for_every_instruction() {
    let entry = IdEx {
        pc_plus1: 10,
        ..id_ex(beq(1, 2, -3), 0, 0)
    };
    let state = StateBuilder::new(&[halt()]).id_ex(entry).build();
    assert_eq!(execute_stage(&state).ex_mem.branch_target, 7);

    let entry = IdEx {
        pc_plus1: 10,
        ..id_ex(add(1, 2, 3), 0, 0)
    };
    let state = StateBuilder::new(&[halt()]).id_ex(entry).build();
    assert_eq!(execute_stage(&state).ex_mem.branch_target, 13);
}

#[test]
fn non_alu_instructions_carry_previous_result() {
    for instr in [halt(), noop(), -1] {
        let state = StateBuilder::new(&[halt()])
            .id_ex(id_ex(instr, 1, 2))
            .ex_mem(ex_mem(add(0, 0, 0), 1234))
            .build();
        assert_eq!(
            execute_stage(&state).ex_mem.alu_result,
            1234,
            "word {instr:#x} leaves alu_result untouched"
        );
    }
}

// ══════════════════════════════════════════════════════════
// 3. Branch resolution
// ══════════════════════════════════════════════════════════

fn resolved_beq(alu_result: i32, target: i32) -> ExMem {
    ExMem {
        instr: beq(0, 0, 0),
        branch_target: target,
        alu_result,
        read_reg_b: 0,
    }
}

#[test]
fn taken_branch_requests_redirect() {
    let state = StateBuilder::new(&[halt()]).ex_mem(resolved_beq(0, 12)).build();
    assert_eq!(execute_stage(&state).redirect, Some(12));
}

#[test]
fn untaken_branch_does_not_redirect() {
    let state = StateBuilder::new(&[halt()]).ex_mem(resolved_beq(-1, 12)).build();
    assert_eq!(execute_stage(&state).redirect, None);
}

#[test]
fn zero_result_of_non_branch_does_not_redirect() {
    let state = StateBuilder::new(&[halt()])
        .ex_mem(ExMem {
            branch_target: 12,
            ..ex_mem(add(0, 0, 1), 0)
        })
        .build();
    assert_eq!(execute_stage(&state).redirect, None);
}
