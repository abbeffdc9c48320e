mod alu16;
mod alu8;
mod bits;
mod control;
mod misc;
mod shift;
mod stack;

use crate::exec::ExecutionResult;
use crate::flags::FlagBatch;
use crate::operand::Location;
use crate::regs::Registers;

/// Progress of an `EI` through the one-instruction enable delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ImeLatch {
    #[default]
    Idle,
    /// `EI` has executed; the next instruction has not started yet.
    Armed,
    /// The instruction following `EI` is executing. IME turns on once it
    /// retires.
    Committing,
}

/// LR35902 instruction library plus the CPU-level state it owns.
///
/// ALU, bit and shift operations are pure associated functions of
/// (register file, operands). Control flow and CPU-control operations take
/// `&mut self` because they charge branch penalties or move the IME latch.
///
/// Dispatchers drive each instruction through `execute` (or the
/// `begin_instruction`/`end_instruction` pair), which fixes the order:
/// advance the pending-enable latch, run the operation, charge its cost.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    ime: bool,
    latch: ImeLatch,
    /// Remaining M-cycles before the next instruction may start.
    wait_time: i32,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the power-on state: IME clear, no pending enable, ready.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Interrupt master enable, as seen by the interrupt controller.
    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Whether an `EI` is still waiting to take effect.
    #[inline]
    pub fn ime_pending(&self) -> bool {
        self.latch != ImeLatch::Idle
    }

    #[inline]
    pub fn wait_time(&self) -> i32 {
        self.wait_time
    }

    /// Whether the next instruction may be fetched.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.wait_time <= 0
    }

    /// Let one M-cycle elapse.
    ///
    /// The dispatcher owns the M-cycle clock and calls this once per cycle
    /// while it waits on `is_ready`. Only executed instructions add to the
    /// counter.
    #[inline]
    pub fn tick(&mut self) {
        self.wait_time -= 1;
    }

    /// Mark the start of an instruction.
    pub fn begin_instruction(&mut self) {
        if self.latch == ImeLatch::Armed {
            self.latch = ImeLatch::Committing;
        }
    }

    /// Retire an instruction whose base cost is `cost` M-cycles.
    pub fn end_instruction(&mut self, cost: u32) {
        self.wait_time += cost as i32;
        if self.latch == ImeLatch::Committing {
            log::debug!("IME enabled (delayed EI)");
            self.ime = true;
            self.latch = ImeLatch::Idle;
        }
    }

    /// Run one instruction costing `cost` M-cycles (not-taken cost for
    /// conditional branches) between `begin_instruction` and
    /// `end_instruction`.
    pub fn execute<R>(&mut self, cost: u32, op: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_instruction();
        let outcome = op(self);
        self.end_instruction(cost);
        outcome
    }
}

/// Store `value` into `loc` and commit `flags`.
///
/// Register targets are updated in place; memory targets become a pending
/// write to the operand's address.
pub(crate) fn write_back(
    mut regs: Registers,
    loc: Location,
    value: u8,
    flags: FlagBatch,
) -> ExecutionResult {
    match loc {
        Location::Register(r) => {
            regs.set8(r, value);
            flags.apply(&mut regs);
            ExecutionResult::new(regs)
        }
        Location::Memory { addr, .. } => {
            flags.apply(&mut regs);
            ExecutionResult::new(regs).with_write(addr, value)
        }
    }
}
