use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::{Register16, StatusFlag};
use crate::regs::Registers;

use super::Interpreter;

/// Add a signed 8-bit offset to a 16-bit base, as `ADD SP,e8` and
/// `LD HL,SP+e8` do.
///
/// H and C come from the unsigned low byte of both operands, whatever the
/// sign of the offset. Z and N are cleared.
pub(super) fn add_signed(base: u16, offset: i8) -> (u16, FlagBatch) {
    let imm = offset as u8 as u16;
    let flags = FlagBatch::znhc(
        false,
        false,
        (base & 0x000F) + (imm & 0x000F) > 0x000F,
        (base & 0x00FF) + (imm & 0x00FF) > 0x00FF,
    );
    (base.wrapping_add_signed(offset as i16), flags)
}

impl Interpreter {
    /// `ADD HL,rr` for any 16-bit value (BC, DE, HL or SP).
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C the
    /// carry out of bit 15.
    pub fn add_hl(mut regs: Registers, value: u16) -> ExecutionResult {
        let hl = regs.hl();
        FlagBatch::new()
            .with(StatusFlag::N, false)
            .with(StatusFlag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF)
            .with(StatusFlag::C, hl as u32 + value as u32 > 0xFFFF)
            .apply(&mut regs);
        regs.set_hl(hl.wrapping_add(value));
        ExecutionResult::new(regs)
    }

    /// `INC rr`. No flags.
    pub fn inc16(mut regs: Registers, r: Register16) -> ExecutionResult {
        let value = regs.get16(r).wrapping_add(1);
        regs.set16(r, value);
        ExecutionResult::new(regs)
    }

    /// `DEC rr`. No flags.
    pub fn dec16(mut regs: Registers, r: Register16) -> ExecutionResult {
        let value = regs.get16(r).wrapping_sub(1);
        regs.set16(r, value);
        ExecutionResult::new(regs)
    }

    /// `INC SP`
    pub fn inc_sp(mut regs: Registers) -> ExecutionResult {
        regs.sp = regs.sp.wrapping_add(1);
        ExecutionResult::new(regs)
    }

    /// `DEC SP`
    pub fn dec_sp(mut regs: Registers) -> ExecutionResult {
        regs.sp = regs.sp.wrapping_sub(1);
        ExecutionResult::new(regs)
    }
}
