use crate::regs::Registers;

/// Most writes a single instruction can produce (CALL/RST/PUSH store two
/// bytes).
pub const MAX_PENDING_WRITES: usize = 2;

/// A byte an instruction stores to memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWrite {
    pub addr: u16,
    pub value: u8,
}

/// Abstraction over the Game Boy bus as seen by the dispatcher.
///
/// The interpreter never touches memory; dispatchers read operands through
/// this trait and commit `ExecutionResult` writes back through it.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

/// Outcome of executing one instruction.
///
/// Carries the full post-instruction register file and up to two pending
/// writes. Writes are ordered and must be applied in sequence before the
/// next instruction reads memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub regs: Registers,
    writes: [MemWrite; MAX_PENDING_WRITES],
    len: u8,
    halt: bool,
}

impl ExecutionResult {
    pub fn new(regs: Registers) -> Self {
        Self {
            regs,
            writes: [MemWrite::default(); MAX_PENDING_WRITES],
            len: 0,
            halt: false,
        }
    }

    /// Append a pending write.
    ///
    /// Panics if the result already holds `MAX_PENDING_WRITES` writes; no
    /// instruction stores more than two bytes.
    #[must_use]
    pub fn with_write(mut self, addr: u16, value: u8) -> Self {
        let len = self.len as usize;
        assert!(
            len < MAX_PENDING_WRITES,
            "instruction produced more than {MAX_PENDING_WRITES} writes"
        );
        self.writes[len] = MemWrite { addr, value };
        self.len += 1;
        self
    }

    /// Mark that the instruction entered HALT.
    #[must_use]
    pub(crate) fn with_halt(mut self) -> Self {
        self.halt = true;
        self
    }

    /// Pending writes in the order they must be applied.
    #[inline]
    pub fn writes(&self) -> &[MemWrite] {
        &self.writes[..self.len as usize]
    }

    #[inline]
    pub fn enters_halt(&self) -> bool {
        self.halt
    }

    /// Apply the pending writes to `bus` in order and hand back the new
    /// register file.
    pub fn commit<B: Bus>(self, bus: &mut B) -> Registers {
        for write in self.writes() {
            bus.write8(write.addr, write.value);
        }
        self.regs
    }
}
