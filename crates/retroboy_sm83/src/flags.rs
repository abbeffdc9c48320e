use bitflags::bitflags;

use crate::operand::StatusFlag;
use crate::regs::Registers;

bitflags! {
    /// The meaningful upper nibble of F.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 0x80;
        const N = 0x40;
        const H = 0x20;
        const C = 0x10;
    }
}

impl From<StatusFlag> for Flags {
    fn from(flag: StatusFlag) -> Self {
        Flags::from_bits_truncate(flag.mask())
    }
}

/// Deferred flag assignments.
///
/// Only the flags an operation touches end up in the mask, so committing a
/// batch leaves every other flag of F as it was:
/// `F = (F & !mask) | (values & mask)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagBatch {
    mask: Flags,
    values: Flags,
}

impl FlagBatch {
    pub const fn new() -> Self {
        Self {
            mask: Flags::empty(),
            values: Flags::empty(),
        }
    }

    /// Batch assigning Z, N, H and C at once.
    pub fn znhc(z: bool, n: bool, h: bool, c: bool) -> Self {
        Self::new()
            .with(StatusFlag::Z, z)
            .with(StatusFlag::N, n)
            .with(StatusFlag::H, h)
            .with(StatusFlag::C, c)
    }

    /// Assign `flag` and add it to the mask.
    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        let bit = Flags::from(flag);
        self.mask.insert(bit);
        self.values.set(bit, value);
    }

    #[must_use]
    pub fn with(mut self, flag: StatusFlag, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    /// Value assigned to `flag`, or `None` if the batch leaves it alone.
    pub fn get(&self, flag: StatusFlag) -> Option<bool> {
        let bit = Flags::from(flag);
        self.mask.contains(bit).then(|| self.values.contains(bit))
    }

    #[inline]
    pub fn touched(&self) -> Flags {
        self.mask
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Combine two batches; assignments in `later` win.
    #[must_use]
    pub fn merge(self, later: FlagBatch) -> Self {
        Self {
            mask: self.mask | later.mask,
            values: (self.values & !later.mask) | (later.values & later.mask),
        }
    }

    pub fn apply(&self, regs: &mut Registers) {
        let mask = self.mask.bits();
        regs.set_f((regs.f() & !mask) | (self.values.bits() & mask));
    }
}
