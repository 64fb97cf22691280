//! Writeback Stage Unit Tests.

use pipesim_core::core::pipeline::stages::wb_stage;

use crate::common::builder::instruction::{add, beq, halt, jalr, lw, noop, nor, sw};
use crate::common::builder::pipeline_state::StateBuilder;

#[test]
fn alu_writes_field2() {
    for instr in [add(1, 2, 6), nor(1, 2, 6)] {
        let state = StateBuilder::new(&[halt()]).mem_wb(instr, 31).build();
        let out = wb_stage(&state).unwrap();
        let (rd, val) = out.reg_write.unwrap();
        assert_eq!((rd.index(), val), (6, 31));
    }
}

#[test]
fn load_writes_field1() {
    let state = StateBuilder::new(&[halt()]).mem_wb(lw(0, 4, 9), 12).build();
    let (rd, val) = wb_stage(&state).unwrap().reg_write.unwrap();
    assert_eq!((rd.index(), val), (4, 12));
}

#[test]
fn others_write_nothing() {
    for instr in [sw(0, 1, 2), beq(0, 1, 2), jalr(1, 2), noop()] {
        let state = StateBuilder::new(&[halt()]).mem_wb(instr, 5).build();
        assert_eq!(wb_stage(&state).unwrap().reg_write, None, "word {instr:#x}");
    }
}

#[test]
fn publishes_wb_end() {
    let state = StateBuilder::new(&[halt()]).mem_wb(sw(0, 1, 2), 5).build();
    let out = wb_stage(&state).unwrap();
    assert_eq!(out.wb_end.instr, sw(0, 1, 2));
    assert_eq!(out.wb_end.write_data, 5);
}

#[test]
fn out_of_range_destination_is_an_error() {
    let state = StateBuilder::new(&[halt()]).mem_wb(add(0, 0, 8), 1).build();
    assert!(wb_stage(&state).is_err());
}
