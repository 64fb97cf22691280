//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It computes:
//! - ADD: `a + b`
//! - NOR: `!(a | b)`
//! - LW/SW: `a + offset`, the effective word address
//! - BEQ: `a - b`, zero meaning the operands are equal
//!
//! All arithmetic wraps on overflow, matching two's-complement hardware.

use crate::common::Word;
use crate::isa::Opcode;

/// Arithmetic Logic Unit for the integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes the ALU operation selected by `opcode`.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Operation of the instruction in Execute.
    /// * `a` - First operand (forwarded `field0` value).
    /// * `b` - Second operand (forwarded `field1` value).
    /// * `offset` - Sign-extended immediate.
    ///
    /// # Returns
    ///
    /// The result, or `None` for JALR, HALT and NOOP, which produce nothing and
    /// leave the previous EX/MEM result in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::units::alu::Alu;
    /// use pipesim_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 2, 3, 0), Some(5));
    /// assert_eq!(Alu::execute(Opcode::Nor, 0, 0, 0), Some(-1));
    /// assert_eq!(Alu::execute(Opcode::Lw, 10, 99, -3), Some(7));
    /// assert_eq!(Alu::execute(Opcode::Beq, 4, 4, 0), Some(0));
    /// assert_eq!(Alu::execute(Opcode::Halt, 1, 1, 1), None);
    /// ```
    pub const fn execute(opcode: Opcode, a: Word, b: Word, offset: Word) -> Option<Word> {
        match opcode {
            Opcode::Add => Some(a.wrapping_add(b)),
            Opcode::Nor => Some(!(a | b)),
            Opcode::Lw | Opcode::Sw => Some(a.wrapping_add(offset)),
            Opcode::Beq => Some(a.wrapping_sub(b)),
            Opcode::Jalr | Opcode::Halt | Opcode::Noop => None,
        }
    }
}
