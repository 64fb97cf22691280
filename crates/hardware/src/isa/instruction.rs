//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding the
//! fixed-format instruction fields from 32-bit words. It provides:
//! 1. **Field Extraction:** `InstructionBits` pulls opcode and the three fields out of a raw word.
//! 2. **Opcode Classification:** `Opcode` is the exhaustive set of defined operations.
//! 3. **Strict Decode:** `Instruction::decode` validates a word before it takes architectural effect.

use crate::common::reg::Reg;
use crate::common::{DecodeFault, SimError, Word};
use crate::isa::opcodes::{
    OP_ADD, OP_BEQ, OP_HALT, OP_JALR, OP_LW, OP_NOOP, OP_NOR, OP_SW, OPCODE_SHIFT,
};

/// Bit mask for extracting the `field0` register (bits 19-21).
pub const FIELD0_MASK: u32 = 0x7;
/// Bit mask for extracting the `field1` register (bits 16-18).
pub const FIELD1_MASK: u32 = 0x7;
/// Bit mask for extracting the 16-bit `field2` (bits 0-15).
pub const FIELD2_MASK: u32 = 0xFFFF;

/// Sign-extends a 16-bit two's-complement value to a full word.
///
/// Only the low 16 bits of `v` are considered.
///
/// # Examples
///
/// ```
/// use pipesim_core::isa::sign_extend_16;
///
/// assert_eq!(sign_extend_16(5), 5);
/// assert_eq!(sign_extend_16(0xFFFF), -1);
/// assert_eq!(sign_extend_16(0x8000), -32768);
/// ```
#[inline(always)]
pub const fn sign_extend_16(v: i32) -> Word {
    (v as i16) as Word
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Extraction never fails: garbage words decode to garbage fields, and it is
/// up to the caller to decide whether the result is meaningful.
pub trait InstructionBits {
    /// Extracts the opcode field (`word >> 22`, arithmetic shift).
    ///
    /// Negative words therefore yield negative opcodes, which are undefined.
    fn opcode_bits(&self) -> i32;

    /// Extracts `field0` (bits 19-21), the first source register.
    fn field0(&self) -> Reg;

    /// Extracts `field1` (bits 16-18), the second source register or LW destination.
    fn field1(&self) -> Reg;

    /// Extracts the raw 16-bit `field2` (bits 0-15), in `0..=0xFFFF`.
    fn field2(&self) -> i32;

    /// Returns `field2` sign-extended, as used for LW/SW/BEQ offsets.
    fn offset(&self) -> Word;
}

impl InstructionBits for Word {
    #[inline(always)]
    fn opcode_bits(&self) -> i32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn field0(&self) -> Reg {
        Reg::from_bits(((*self as u32) >> 19) & FIELD0_MASK)
    }

    #[inline(always)]
    fn field1(&self) -> Reg {
        Reg::from_bits(((*self as u32) >> 16) & FIELD1_MASK)
    }

    #[inline(always)]
    fn field2(&self) -> i32 {
        ((*self as u32) & FIELD2_MASK) as i32
    }

    #[inline(always)]
    fn offset(&self) -> Word {
        sign_extend_16(self.field2())
    }
}

/// The defined operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Register-register add.
    Add,
    /// Register-register nor.
    Nor,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Reserved jump-and-link; passes through the pipeline with no effect.
    Jalr,
    /// Halt the machine.
    Halt,
    /// No operation.
    Noop,
}

impl Opcode {
    /// Maps an opcode field value to an operation.
    ///
    /// # Returns
    ///
    /// `None` for values outside `0..=7`.
    pub const fn from_bits(bits: i32) -> Option<Self> {
        match bits {
            OP_ADD => Some(Self::Add),
            OP_NOR => Some(Self::Nor),
            OP_LW => Some(Self::Lw),
            OP_SW => Some(Self::Sw),
            OP_BEQ => Some(Self::Beq),
            OP_JALR => Some(Self::Jalr),
            OP_HALT => Some(Self::Halt),
            OP_NOOP => Some(Self::Noop),
            _ => None,
        }
    }

    /// Classifies a raw word by its opcode field.
    ///
    /// This is the lenient view used by stages that may be holding wrong-path or
    /// post-HALT words: an undefined opcode is reported as `None` rather than an error.
    #[inline]
    pub const fn of(word: Word) -> Option<Self> {
        Self::from_bits(word >> OPCODE_SHIFT)
    }

    /// Returns the numeric opcode value.
    pub const fn bits(self) -> i32 {
        match self {
            Self::Add => OP_ADD,
            Self::Nor => OP_NOR,
            Self::Lw => OP_LW,
            Self::Sw => OP_SW,
            Self::Beq => OP_BEQ,
            Self::Jalr => OP_JALR,
            Self::Halt => OP_HALT,
            Self::Noop => OP_NOOP,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Nor => "nor",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Jalr => "jalr",
            Self::Halt => "halt",
            Self::Noop => "noop",
        }
    }

    /// Whether the operation reads `field0` and `field1` as operands.
    ///
    /// JALR, HALT and NOOP read nothing meaningful, so the forwarding unit
    /// and the hazard unit ignore them as consumers.
    pub const fn reads_operands(self) -> bool {
        matches!(self, Self::Add | Self::Nor | Self::Lw | Self::Sw | Self::Beq)
    }
}

/// A strictly decoded instruction.
///
/// Produced only for instructions that are about to take architectural effect;
/// decoding rejects undefined opcodes and out-of-range destination registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit encoding.
    pub word: Word,
    /// Operation.
    pub opcode: Opcode,
    /// `field0` (regA).
    pub reg_a: Reg,
    /// `field1` (regB).
    pub reg_b: Reg,
    /// Raw `field2`.
    pub field2: i32,
}

impl Instruction {
    /// Decodes and validates a raw word.
    ///
    /// # Arguments
    ///
    /// * `word` - The raw instruction word.
    ///
    /// # Returns
    ///
    /// The decoded instruction, or `SimError::InvalidInstruction` if the opcode is
    /// undefined or an ADD/NOR destination does not name a register.
    pub fn decode(word: Word) -> Result<Self, SimError> {
        let opcode = Opcode::of(word).ok_or(SimError::InvalidInstruction {
            word,
            fault: DecodeFault::UndefinedOpcode(word.opcode_bits()),
        })?;

        let field2 = word.field2();
        if matches!(opcode, Opcode::Add | Opcode::Nor) && Reg::new(field2).is_none() {
            return Err(SimError::InvalidInstruction {
                word,
                fault: DecodeFault::RegisterOutOfRange(field2),
            });
        }

        Ok(Self {
            word,
            opcode,
            reg_a: word.field0(),
            reg_b: word.field1(),
            field2,
        })
    }

    /// Sign-extended `field2`.
    pub const fn offset(&self) -> Word {
        sign_extend_16(self.field2)
    }

    /// Register this instruction writes at writeback, if any.
    ///
    /// ADD and NOR write `field2`; LW writes `field1`; nothing else writes.
    pub const fn dest(&self) -> Option<Reg> {
        match self.opcode {
            Opcode::Add | Opcode::Nor => Reg::new(self.field2),
            Opcode::Lw => Some(self.reg_b),
            Opcode::Sw | Opcode::Beq | Opcode::Jalr | Opcode::Halt | Opcode::Noop => None,
        }
    }
}
