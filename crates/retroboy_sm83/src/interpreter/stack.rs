use crate::exec::ExecutionResult;
use crate::operand::Register16;
use crate::regs::Registers;

use super::alu16::add_signed;
use super::Interpreter;

/// Push `value`: SP drops by two and the high byte lands at SP+1, the low
/// byte at SP, written high byte first as the hardware does.
pub(super) fn push_u16(mut regs: Registers, value: u16) -> ExecutionResult {
    let [hi, lo] = value.to_be_bytes();
    let hi_addr = regs.sp.wrapping_sub(1);
    let lo_addr = regs.sp.wrapping_sub(2);
    regs.sp = lo_addr;
    ExecutionResult::new(regs)
        .with_write(hi_addr, hi)
        .with_write(lo_addr, lo)
}

impl Interpreter {
    /// `PUSH rr`
    pub fn push(regs: Registers, r: Register16) -> ExecutionResult {
        push_u16(regs, regs.get16(r))
    }

    /// `POP rr` given the 16-bit value read from SP (low byte) and SP+1.
    /// Popping into AF masks the low nibble of F.
    pub fn pop(mut regs: Registers, r: Register16, value: u16) -> ExecutionResult {
        regs.set16(r, value);
        regs.sp = regs.sp.wrapping_add(2);
        ExecutionResult::new(regs)
    }

    /// Complete a taken `RET`/`RETI` with the return address read from
    /// the stack.
    pub fn ret_to(mut regs: Registers, addr: u16) -> ExecutionResult {
        regs.pc = addr;
        regs.sp = regs.sp.wrapping_add(2);
        ExecutionResult::new(regs)
    }

    /// `ADD SP,e8`
    pub fn add_sp(mut regs: Registers, offset: i8) -> ExecutionResult {
        let (sp, flags) = add_signed(regs.sp, offset);
        regs.sp = sp;
        flags.apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `LD HL,SP+e8`
    pub fn ld_hl_sp(mut regs: Registers, offset: i8) -> ExecutionResult {
        let (hl, flags) = add_signed(regs.sp, offset);
        regs.set_hl(hl);
        flags.apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `LD SP,HL`
    pub fn ld_sp_hl(mut regs: Registers) -> ExecutionResult {
        regs.sp = regs.hl();
        ExecutionResult::new(regs)
    }
}
