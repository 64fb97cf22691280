//! Machine State Tests.
//!
//! Verifies the reset state built from an image and the bounds-checked stores.

use pipesim_core::MachineState;
use pipesim_core::common::{AccessType, LoadError, NUM_MEMORY, SimError};
use pipesim_core::core::machine::Memory;
use pipesim_core::isa::NOOP_INSTRUCTION;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, halt};

// ══════════════════════════════════════════════════════════
// 1. Reset state
// ══════════════════════════════════════════════════════════

#[test]
fn new_state_mirrors_image_into_both_stores() {
    let image = [add(1, 2, 3), halt(), 42];
    let state = MachineState::new(&image).unwrap();

    assert_eq!(state.pc, 0);
    assert_eq!(state.cycles, 0);
    assert_eq!(state.num_memory, 3);
    assert_eq!(&state.instr_mem.as_slice()[..3], &image);
    assert_eq!(state.data_image(), &image);
    assert_eq!(state.data_mem.as_slice()[3], 0, "past the image the store is zero");
    assert_eq!(state.regs.as_slice(), &[0; 8]);
}

#[test]
fn new_state_latches_are_noop() {
    let state = MachineState::new(&[halt()]).unwrap();
    assert_eq!(state.if_id.instr, NOOP_INSTRUCTION);
    assert_eq!(state.id_ex.instr, NOOP_INSTRUCTION);
    assert_eq!(state.ex_mem.instr, NOOP_INSTRUCTION);
    assert_eq!(state.mem_wb.instr, NOOP_INSTRUCTION);
    assert_eq!(state.wb_end.instr, NOOP_INSTRUCTION);
    assert_eq!(state.ex_mem.alu_result, 0);
}

#[test]
fn oversize_image_is_rejected() {
    let image = vec![0; NUM_MEMORY + 1];
    let err = MachineState::new(&image).unwrap_err();
    assert!(
        matches!(err, LoadError::TooLarge { len, capacity } if len == NUM_MEMORY + 1 && capacity == NUM_MEMORY)
    );
}

#[test]
fn full_size_image_is_accepted() {
    let image = vec![0; NUM_MEMORY];
    assert!(MachineState::new(&image).is_ok());
}

// ══════════════════════════════════════════════════════════
// 2. Memory bounds
// ══════════════════════════════════════════════════════════

#[test]
fn memory_rejects_negative_and_oversize_addresses() {
    let mut mem = Memory::new();
    assert_eq!(mem.capacity(), NUM_MEMORY);
    assert_eq!(
        mem.read(-1, AccessType::Read),
        Err(SimError::InvalidAddress {
            addr: -1,
            access: AccessType::Read
        })
    );
    assert_eq!(
        mem.write(NUM_MEMORY as i32, 1),
        Err(SimError::InvalidAddress {
            addr: NUM_MEMORY as i32,
            access: AccessType::Write
        })
    );
    assert!(mem.check_write(-5).is_err());
    assert!(mem.check_write(0).is_ok());
}

#[test]
fn memory_read_write_round_trip_at_edges() {
    let mut mem = Memory::new();
    let last = NUM_MEMORY as i32 - 1;
    mem.write(last, -7).unwrap();
    assert_eq!(mem.read(last, AccessType::Read), Ok(-7));
    assert_eq!(mem.read(0, AccessType::Fetch), Ok(0));
}

#[test]
fn memory_serializes_up_to_last_nonzero_word() {
    let mem = Memory::from_image(&[1, 0, 3, 0, 0]);
    assert_eq!(serde_json::to_string(&mem).unwrap(), "[1,0,3]");
    assert_eq!(serde_json::to_string(&Memory::new()).unwrap(), "[]");
}

#[test]
fn state_serializes_latches_by_name() {
    let state = MachineState::new(&[halt()]).unwrap();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["pc"], 0);
    assert_eq!(json["if_id"]["instr"], NOOP_INSTRUCTION);
    assert_eq!(json["data_mem"], serde_json::json!([halt()]));
    assert_eq!(json["regs"]["regs"], serde_json::json!([0, 0, 0, 0, 0, 0, 0, 0]));
}
