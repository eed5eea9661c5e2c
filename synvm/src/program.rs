//! Instruction and operand model
//!
//! Instructions are immutable once constructed and shared read-only by
//! every execution state that runs them.

use crate::error::{ExecError, ExecResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation tag of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    /// Bind a name to a cloned value
    Let,
    /// Sum two numeric operands into a target local
    Add,
    /// Multiply two numeric operands into a target local
    Mul,
    /// Absolute jump
    Jump,
    /// Compare two ints, jump on equality
    Cmp,
    /// Emit an int on the debug side channel
    Print,
    /// Capture the result and halt
    Ret,
}

impl Opcode {
    /// Assembly-style mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Let => "LET",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Jump => "JUMP",
            Opcode::Cmp => "CMP",
            Opcode::Print => "PRINT",
            Opcode::Ret => "RET",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An instruction operand: an inline literal, or a named reference
/// resolved against the local table at the instant it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Param {
    /// Inline value owned by the instruction
    Literal(Value),
    /// Reference to a local by name
    Local(String),
}

/// One opcode plus its ordered operands. Never mutated during execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub op: Opcode,
    pub params: Vec<Param>,
}

impl Instruction {
    /// Build an instruction
    pub fn new(op: Opcode, params: Vec<Param>) -> Self {
        Instruction { op, params }
    }

    /// Checked operand access. A missing operand is a typed error,
    /// never an index panic.
    pub fn param(&self, index: usize) -> ExecResult<&Param> {
        self.params
            .get(index)
            .ok_or(ExecError::MissingOperand { op: self.op, index })
    }
}
