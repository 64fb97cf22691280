//! Fetch Stage Unit Tests.

use pipesim_core::common::{AccessType, NUM_MEMORY, SimError};
use pipesim_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::{add, halt};
use crate::common::builder::pipeline_state::StateBuilder;

#[test]
fn fetches_word_at_pc_and_proposes_next() {
    let state = StateBuilder::new(&[add(1, 2, 3), halt()]).pc(1).build();
    let out = fetch_stage(&state).unwrap();
    assert_eq!(out.if_id.instr, halt());
    assert_eq!(out.if_id.pc_plus1, 2);
    assert_eq!(out.next_pc, 2);
}

#[test]
fn fetch_past_image_reads_zero() {
    let state = StateBuilder::new(&[halt()]).pc(10).build();
    assert_eq!(fetch_stage(&state).unwrap().if_id.instr, 0);
}

#[test]
fn fetch_outside_store_is_an_error() {
    for pc in [-1, NUM_MEMORY as i32] {
        let state = StateBuilder::new(&[halt()]).pc(pc).build();
        assert_eq!(
            fetch_stage(&state).unwrap_err(),
            SimError::InvalidAddress {
                addr: pc,
                access: AccessType::Fetch
            }
        );
    }
}

#[test]
fn fetch_does_not_mutate_state() {
    let state = StateBuilder::new(&[add(1, 2, 3)]).build();
    let before = state.clone();
    let _ = fetch_stage(&state).unwrap();
    assert_eq!(state, before);
}
