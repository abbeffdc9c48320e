use crate::exec::ExecutionResult;
use crate::operand::BranchCondition;
use crate::regs::Registers;
use crate::timing::{
    CALL_TAKEN_PENALTY, JP_TAKEN_PENALTY, JR_TAKEN_PENALTY, RET_TAKEN_PENALTY,
};

use super::stack::push_u16;
use super::{ImeLatch, Interpreter};

// Branch operations expect `regs.pc` to already point past the instruction
// and its operands, as it does once the dispatcher has fetched them.
impl Interpreter {
    /// Evaluate `cond` and charge `penalty` when a conditional branch is
    /// taken.
    fn branch_taken(&mut self, regs: &Registers, cond: BranchCondition, penalty: i32) -> bool {
        let taken = cond.holds(regs);
        if taken && !cond.is_unconditional() {
            self.wait_time += penalty;
        }
        taken
    }

    /// `JP cc,a16` / `JP a16`
    pub fn jp(&mut self, mut regs: Registers, cond: BranchCondition, addr: u16) -> ExecutionResult {
        if self.branch_taken(&regs, cond, JP_TAKEN_PENALTY) {
            log::trace!("JP {cond:?} taken: {:#06x} -> {addr:#06x}", regs.pc);
            regs.pc = addr;
        }
        ExecutionResult::new(regs)
    }

    /// `JR cc,e8` / `JR e8`
    pub fn jr(
        &mut self,
        mut regs: Registers,
        cond: BranchCondition,
        offset: i8,
    ) -> ExecutionResult {
        if self.branch_taken(&regs, cond, JR_TAKEN_PENALTY) {
            let target = regs.pc.wrapping_add_signed(offset as i16);
            log::trace!("JR {cond:?} taken: {:#06x} -> {target:#06x}", regs.pc);
            regs.pc = target;
        }
        ExecutionResult::new(regs)
    }

    /// `JP HL`
    pub fn jp_hl(mut regs: Registers) -> ExecutionResult {
        regs.pc = regs.hl();
        ExecutionResult::new(regs)
    }

    /// `CALL cc,a16` / `CALL a16`
    ///
    /// When taken, the return address (the current PC) is pushed as two
    /// pending writes and PC moves to `addr`. Not taken leaves PC, SP and
    /// memory alone.
    pub fn call(&mut self, regs: Registers, cond: BranchCondition, addr: u16) -> ExecutionResult {
        if !self.branch_taken(&regs, cond, CALL_TAKEN_PENALTY) {
            return ExecutionResult::new(regs);
        }
        log::trace!("CALL {cond:?} taken: {:#06x} -> {addr:#06x}", regs.pc);
        let mut result = push_u16(regs, regs.pc);
        result.regs.pc = addr;
        result
    }

    /// `RST vec`: unconditional call to `vector * 8`.
    pub fn rst(&mut self, regs: Registers, vector: u8) -> ExecutionResult {
        assert!(vector < 8, "RST vector {vector} out of range");
        self.call(regs, BranchCondition::Unconditional, vector as u16 * 8)
    }

    /// `RET cc` / `RET` / `RETI`
    ///
    /// Returns whether the return is taken; the dispatcher then pops the
    /// address and finishes with `Interpreter::ret_to`. With
    /// `enable_interrupts` a taken return sets IME immediately, with no
    /// `EI`-style delay.
    pub fn ret(
        &mut self,
        regs: &Registers,
        cond: BranchCondition,
        enable_interrupts: bool,
    ) -> bool {
        let taken = self.branch_taken(regs, cond, RET_TAKEN_PENALTY);
        if taken && enable_interrupts {
            log::debug!("IME enabled (RETI)");
            self.ime = true;
            self.latch = ImeLatch::Idle;
        }
        taken
    }
}
