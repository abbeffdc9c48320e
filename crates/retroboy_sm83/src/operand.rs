//! Operand descriptors shared by the instruction library.
//!
//! These are plain value tags. Decoding them from opcode bit-fields is the
//! only fallible step; once a dispatcher holds one of these values every
//! operation that accepts it produces a defined result.

use thiserror::Error;

use crate::regs::Registers;

/// Errors produced while decoding opcode bit-fields into operands.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OperandError {
    /// Index 6 of the `r` field selects `(HL)`, not a register.
    #[error("register index 6 addresses (HL), not a register")]
    MemoryOperand,
    #[error("register index {0} is out of range")]
    Register8(u8),
    #[error("register pair index {0} is out of range")]
    Register16(u8),
    #[error("branch condition index {0} is out of range")]
    Condition(u8),
}

/// Single 8-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register8 {
    A,
    B,
    C,
    D,
    E,
    F,
    H,
    L,
}

impl TryFrom<u8> for Register8 {
    type Error = OperandError;

    /// Decode the 3-bit `r` field used by opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Register8::B),
            1 => Ok(Register8::C),
            2 => Ok(Register8::D),
            3 => Ok(Register8::E),
            4 => Ok(Register8::H),
            5 => Ok(Register8::L),
            6 => Err(OperandError::MemoryOperand),
            7 => Ok(Register8::A),
            _ => Err(OperandError::Register8(index)),
        }
    }
}

/// 16-bit register pairs. High register in bits 15-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register16 {
    AF,
    BC,
    DE,
    HL,
}

impl TryFrom<u8> for Register16 {
    type Error = OperandError;

    /// Decode the 2-bit `rp2` field used by PUSH/POP (0=BC, 1=DE, 2=HL, 3=AF).
    ///
    /// The `rp` field of the 16-bit loads and arithmetic puts SP in slot 3;
    /// dispatchers handle that slot themselves since SP is not a pair.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Register16::BC),
            1 => Ok(Register16::DE),
            2 => Ok(Register16::HL),
            3 => Ok(Register16::AF),
            _ => Err(OperandError::Register16(index)),
        }
    }
}

/// Flag bits in the F register.
///
/// The discriminant is the bit index inside F:
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusFlag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl StatusFlag {
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

/// Flag-based predicate gating JP/JR/CALL/RET.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCondition {
    Z,
    NZ,
    C,
    NC,
    Unconditional,
}

impl BranchCondition {
    /// The flag tested by this condition and the value it must have.
    ///
    /// Panics for `Unconditional`, which has no flag test; asking for one
    /// is a dispatcher bug.
    pub fn flag_test(self) -> (StatusFlag, bool) {
        match self {
            BranchCondition::Z => (StatusFlag::Z, true),
            BranchCondition::NZ => (StatusFlag::Z, false),
            BranchCondition::C => (StatusFlag::C, true),
            BranchCondition::NC => (StatusFlag::C, false),
            BranchCondition::Unconditional => {
                unreachable!("unconditional branch has no flag test")
            }
        }
    }

    /// Evaluate the condition against a pre-instruction register file.
    #[inline]
    pub fn holds(self, regs: &Registers) -> bool {
        if self.is_unconditional() {
            return true;
        }
        let (flag, expected) = self.flag_test();
        regs.flag(flag) == expected
    }

    #[inline]
    pub fn is_unconditional(self) -> bool {
        matches!(self, BranchCondition::Unconditional)
    }
}

impl TryFrom<u8> for BranchCondition {
    type Error = OperandError;

    /// Decode the 2-bit `cc` field (0=NZ, 1=Z, 2=NC, 3=C).
    fn try_from(cc: u8) -> Result<Self, Self::Error> {
        match cc {
            0 => Ok(BranchCondition::NZ),
            1 => Ok(BranchCondition::Z),
            2 => Ok(BranchCondition::NC),
            3 => Ok(BranchCondition::C),
            _ => Err(OperandError::Condition(cc)),
        }
    }
}

/// Target of a read-modify-write operation.
///
/// Memory operands carry the byte the dispatcher already read; the result is
/// reported back as a pending write to the same address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Register(Register8),
    Memory { addr: u16, value: u8 },
}

impl Location {
    /// Current value of the operand.
    #[inline]
    pub fn read(self, regs: &Registers) -> u8 {
        match self {
            Location::Register(r) => regs.get8(r),
            Location::Memory { value, .. } => value,
        }
    }
}

impl From<Register8> for Location {
    fn from(r: Register8) -> Self {
        Location::Register(r)
    }
}
