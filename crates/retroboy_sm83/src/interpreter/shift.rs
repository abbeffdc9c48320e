use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::{Location, Register8, StatusFlag};
use crate::regs::Registers;

use super::{write_back, Interpreter};

const ACCUMULATOR: Location = Location::Register(Register8::A);

/// Commit a shift result. `carry` is the bit shifted out, captured before
/// shifting. With `set_z` false Z is forced to 0, as the unprefixed
/// accumulator rotates do.
fn shifted(
    regs: Registers,
    loc: Location,
    result: u8,
    carry: bool,
    set_z: bool,
) -> ExecutionResult {
    let flags = FlagBatch::znhc(set_z && result == 0, false, false, carry);
    write_back(regs, loc, result, flags)
}

impl Interpreter {
    /// `RLC n` (`set_z`) or `RLCA`: rotate left, bit 7 to C and bit 0.
    pub fn rlc(regs: Registers, loc: Location, set_z: bool) -> ExecutionResult {
        let value = loc.read(&regs);
        let carry = (value & 0x80) != 0;
        shifted(regs, loc, value.rotate_left(1), carry, set_z)
    }

    /// `RRC n` (`set_z`) or `RRCA`: rotate right, bit 0 to C and bit 7.
    pub fn rrc(regs: Registers, loc: Location, set_z: bool) -> ExecutionResult {
        let value = loc.read(&regs);
        let carry = (value & 0x01) != 0;
        shifted(regs, loc, value.rotate_right(1), carry, set_z)
    }

    /// `RL n` (`set_z`) or `RLA`: rotate left through the incoming C.
    pub fn rl(regs: Registers, loc: Location, set_z: bool) -> ExecutionResult {
        let value = loc.read(&regs);
        let carry_in = regs.flag(StatusFlag::C) as u8;
        let carry = (value & 0x80) != 0;
        shifted(regs, loc, (value << 1) | carry_in, carry, set_z)
    }

    /// `RR n` (`set_z`) or `RRA`: rotate right through the incoming C.
    pub fn rr(regs: Registers, loc: Location, set_z: bool) -> ExecutionResult {
        let value = loc.read(&regs);
        let carry_in = if regs.flag(StatusFlag::C) { 0x80 } else { 0 };
        let carry = (value & 0x01) != 0;
        shifted(regs, loc, (value >> 1) | carry_in, carry, set_z)
    }

    /// `SLA n`: shift left, 0 into bit 0.
    pub fn sla(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs);
        shifted(regs, loc, value << 1, (value & 0x80) != 0, true)
    }

    /// `SRA n`: arithmetic shift right, bit 7 kept.
    pub fn sra(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs);
        shifted(regs, loc, (value >> 1) | (value & 0x80), (value & 0x01) != 0, true)
    }

    /// `SRL n`: logical shift right, 0 into bit 7.
    pub fn srl(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs);
        shifted(regs, loc, value >> 1, (value & 0x01) != 0, true)
    }

    #[inline]
    pub fn rlca(regs: Registers) -> ExecutionResult {
        Self::rlc(regs, ACCUMULATOR, false)
    }

    #[inline]
    pub fn rrca(regs: Registers) -> ExecutionResult {
        Self::rrc(regs, ACCUMULATOR, false)
    }

    #[inline]
    pub fn rla(regs: Registers) -> ExecutionResult {
        Self::rl(regs, ACCUMULATOR, false)
    }

    #[inline]
    pub fn rra(regs: Registers) -> ExecutionResult {
        Self::rr(regs, ACCUMULATOR, false)
    }
}
