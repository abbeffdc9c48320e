use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::{Location, Register8, StatusFlag};
use crate::regs::Registers;

use super::{write_back, Interpreter};

/// Core 8-bit addition with optional carry-in.
///
/// H is the carry out of bit 3 of the nibble sum, C the carry out of bit 7.
fn add(a: u8, value: u8, carry_in: bool) -> (u8, FlagBatch) {
    let carry = carry_in as u8;
    let half = (a & 0x0F) + (value & 0x0F) + carry;
    let full = a as u16 + value as u16 + carry as u16;
    let result = full as u8;
    let flags = FlagBatch::znhc(result == 0, false, (half & 0x10) != 0, full > 0xFF);
    (result, flags)
}

/// Core 8-bit subtraction with optional borrow-in.
///
/// H is the borrow out of bit 4 of the nibble difference, C the borrow of
/// the full difference.
fn sub(a: u8, value: u8, carry_in: bool) -> (u8, FlagBatch) {
    let carry = carry_in as i16;
    let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry;
    let full = a as i16 - value as i16 - carry;
    let result = full as u8;
    let flags = FlagBatch::znhc(result == 0, true, half < 0, full < 0);
    (result, flags)
}

fn logic(result: u8, half_carry: bool) -> (u8, FlagBatch) {
    (result, FlagBatch::znhc(result == 0, false, half_carry, false))
}

fn accumulate(mut regs: Registers, (result, flags): (u8, FlagBatch)) -> ExecutionResult {
    regs.a = result;
    flags.apply(&mut regs);
    ExecutionResult::new(regs)
}

impl Interpreter {
    /// `ADD A,n`
    pub fn add8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, add(regs.a, value, false))
    }

    /// `ADC A,n`
    pub fn adc8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, add(regs.a, value, regs.flag(StatusFlag::C)))
    }

    /// `SUB A,n`
    pub fn sub8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, sub(regs.a, value, false))
    }

    /// `SBC A,n`
    pub fn sbc8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, sub(regs.a, value, regs.flag(StatusFlag::C)))
    }

    /// `CP A,n`: flags as for `SUB`, A untouched.
    pub fn cp8(mut regs: Registers, value: u8) -> ExecutionResult {
        let (_, flags) = sub(regs.a, value, false);
        flags.apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `AND A,n`. H is always set.
    pub fn and8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, logic(regs.a & value, true))
    }

    /// `OR A,n`
    pub fn or8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, logic(regs.a | value, false))
    }

    /// `XOR A,n`
    pub fn xor8(regs: Registers, value: u8) -> ExecutionResult {
        accumulate(regs, logic(regs.a ^ value, false))
    }

    /// `INC r` / `INC (HL)`. C is left as it was.
    pub fn inc(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs);
        let result = value.wrapping_add(1);
        let flags = FlagBatch::new()
            .with(StatusFlag::Z, result == 0)
            .with(StatusFlag::N, false)
            .with(StatusFlag::H, (value & 0x0F) + 1 > 0x0F);
        write_back(regs, loc, result, flags)
    }

    /// `DEC r` / `DEC (HL)`. C is left as it was.
    pub fn dec(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs);
        let result = value.wrapping_sub(1);
        let flags = FlagBatch::new()
            .with(StatusFlag::Z, result == 0)
            .with(StatusFlag::N, true)
            .with(StatusFlag::H, (value & 0x0F) == 0);
        write_back(regs, loc, result, flags)
    }

    #[inline]
    pub fn inc8(regs: Registers, r: Register8) -> ExecutionResult {
        Self::inc(regs, Location::Register(r))
    }

    #[inline]
    pub fn dec8(regs: Registers, r: Register8) -> ExecutionResult {
        Self::dec(regs, Location::Register(r))
    }

    /// `INC (HL)` given the byte already read from `addr`.
    #[inline]
    pub fn inc8_mem(regs: Registers, addr: u16, value: u8) -> ExecutionResult {
        Self::inc(regs, Location::Memory { addr, value })
    }

    /// `DEC (HL)` given the byte already read from `addr`.
    #[inline]
    pub fn dec8_mem(regs: Registers, addr: u16, value: u8) -> ExecutionResult {
        Self::dec(regs, Location::Memory { addr, value })
    }

    /// `DAA`: decimal adjust A after a BCD addition or subtraction.
    ///
    /// Uses C, H and N to pick the correction. Updates Z, H and C; N is
    /// unchanged.
    pub fn daa(mut regs: Registers) -> ExecutionResult {
        let mut a = regs.a;
        let mut adjust: u8 = if regs.flag(StatusFlag::C) { 0x60 } else { 0x00 };
        if regs.flag(StatusFlag::H) {
            adjust |= 0x06;
        }

        if !regs.flag(StatusFlag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        regs.a = a;
        FlagBatch::new()
            .with(StatusFlag::Z, a == 0)
            .with(StatusFlag::H, false)
            .with(StatusFlag::C, adjust >= 0x60)
            .apply(&mut regs);
        ExecutionResult::new(regs)
    }
}
