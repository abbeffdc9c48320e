//! Instruction-execution engine for the Game Boy LR35902 CPU.
//!
//! Every operation maps a register-file snapshot and its operands to an
//! [`ExecutionResult`]: the new register file plus the memory writes the
//! caller must commit. Fetch, decode, the memory bus and interrupt dispatch
//! live outside this crate.

pub mod exec;
pub mod flags;
pub mod interpreter;
pub mod operand;
pub mod regs;
pub mod timing;

pub use exec::{Bus, ExecutionResult, MemWrite};
pub use flags::{FlagBatch, Flags};
pub use interpreter::Interpreter;
pub use operand::{BranchCondition, Location, OperandError, Register16, Register8, StatusFlag};
pub use regs::{Model, Registers};
