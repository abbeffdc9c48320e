//! Instruction timing in M-cycles.
//!
//! One M-cycle is four T-cycles (clock ticks). Dispatchers declare the base
//! cost of each instruction; for conditional branches that is the
//! not-taken cost, and the interpreter adds the penalty below when the
//! branch is taken.

pub const T_CYCLES_PER_M_CYCLE: u32 = 4;

/// Extra M-cycles for a taken `CALL cc,a16` (3 not taken, 6 taken).
pub const CALL_TAKEN_PENALTY: i32 = 3;
/// Extra M-cycles for a taken `JP cc,a16` (3 not taken, 4 taken).
pub const JP_TAKEN_PENALTY: i32 = 1;
/// Extra M-cycles for a taken `JR cc,e8` (2 not taken, 3 taken).
pub const JR_TAKEN_PENALTY: i32 = 1;
/// Extra M-cycles for a taken `RET cc` (2 not taken, 5 taken).
pub const RET_TAKEN_PENALTY: i32 = 3;

#[inline]
pub const fn m_to_t_cycles(m_cycles: u32) -> u32 {
    m_cycles * T_CYCLES_PER_M_CYCLE
}
