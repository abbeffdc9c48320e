use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::{Location, StatusFlag};
use crate::regs::Registers;

use super::{write_back, Interpreter};

#[inline]
fn bit_mask(bit: u8) -> u8 {
    assert!(bit < 8, "bit index {bit} out of range");
    1 << bit
}

impl Interpreter {
    /// `BIT b,n`: Z is set when the tested bit is 0, H=1, N=0, C untouched.
    pub fn bit(mut regs: Registers, bit: u8, value: u8) -> ExecutionResult {
        let set = (value & bit_mask(bit)) != 0;
        FlagBatch::new()
            .with(StatusFlag::Z, !set)
            .with(StatusFlag::N, false)
            .with(StatusFlag::H, true)
            .apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `RES b,n`. No flags.
    pub fn res(regs: Registers, bit: u8, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs) & !bit_mask(bit);
        write_back(regs, loc, value, FlagBatch::new())
    }

    /// `SET b,n`. No flags.
    pub fn set(regs: Registers, bit: u8, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs) | bit_mask(bit);
        write_back(regs, loc, value, FlagBatch::new())
    }

    /// `SWAP n`: exchange nibbles.
    pub fn swap(regs: Registers, loc: Location) -> ExecutionResult {
        let value = loc.read(&regs).rotate_left(4);
        write_back(regs, loc, value, FlagBatch::znhc(value == 0, false, false, false))
    }
}
