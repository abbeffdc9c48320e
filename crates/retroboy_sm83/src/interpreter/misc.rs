use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::StatusFlag;
use crate::regs::Registers;

use super::{ImeLatch, Interpreter};

impl Interpreter {
    pub fn nop(regs: Registers) -> ExecutionResult {
        ExecutionResult::new(regs)
    }

    /// `CCF`: complement C, clear N and H.
    pub fn ccf(mut regs: Registers) -> ExecutionResult {
        let carry = regs.flag(StatusFlag::C);
        FlagBatch::new()
            .with(StatusFlag::N, false)
            .with(StatusFlag::H, false)
            .with(StatusFlag::C, !carry)
            .apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `SCF`: set C, clear N and H.
    pub fn scf(mut regs: Registers) -> ExecutionResult {
        FlagBatch::new()
            .with(StatusFlag::N, false)
            .with(StatusFlag::H, false)
            .with(StatusFlag::C, true)
            .apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `CPL`: complement A, set N and H. Z and C untouched.
    pub fn cpl(mut regs: Registers) -> ExecutionResult {
        regs.a = !regs.a;
        FlagBatch::new()
            .with(StatusFlag::N, true)
            .with(StatusFlag::H, true)
            .apply(&mut regs);
        ExecutionResult::new(regs)
    }

    /// `DI`: clear IME immediately and drop any pending `EI`.
    pub fn di(&mut self, regs: Registers) -> ExecutionResult {
        if self.ime || self.latch != ImeLatch::Idle {
            log::debug!("IME disabled (DI)");
        }
        self.ime = false;
        self.latch = ImeLatch::Idle;
        ExecutionResult::new(regs)
    }

    /// `EI`: IME becomes 1 after the *next* instruction completes.
    ///
    /// A second `EI` in that window does not restart the delay.
    pub fn ei(&mut self, regs: Registers) -> ExecutionResult {
        if !self.ime && self.latch == ImeLatch::Idle {
            self.latch = ImeLatch::Armed;
        }
        ExecutionResult::new(regs)
    }

    /// `HALT`: signal entry into the halt state.
    ///
    /// Leaving HALT is up to the interrupt controller. With IME clear and
    /// an interrupt already pending, hardware does not halt and instead
    /// fails to increment PC on the next fetch (the HALT bug); that
    /// behaviour belongs to the dispatcher, which can see IE/IF.
    pub fn halt(&mut self, regs: Registers) -> ExecutionResult {
        if !self.ime {
            log::debug!("HALT with IME clear at PC={:#06x}", regs.pc);
        }
        ExecutionResult::new(regs).with_halt()
    }
}
