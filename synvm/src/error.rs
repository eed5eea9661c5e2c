//! Execution error types
//!
//! Every failure aborts only the current case's run; the driving loop
//! decides whether to continue with the next case.

use crate::program::Opcode;
use thiserror::Error;

/// Result type alias for engine operations
pub type ExecResult<T> = std::result::Result<T, ExecError>;

/// Execution error
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecError {
    #[error("local {name} not found")]
    UnknownLocal { name: String },

    #[error("{op} missing operand {index}")]
    MissingOperand { op: Opcode, index: usize },

    #[error("{op} expects a text literal naming the binding")]
    ExpectedName { op: Opcode },

    #[error("{op} can't support these types: {detail}")]
    UnsupportedOperands { op: Opcode, detail: String },

    #[error("can't print a {type_name} value")]
    UnsupportedPrint { type_name: &'static str },

    #[error("compare can't support these types: {left} == {right}")]
    UnsupportedComparison {
        left: &'static str,
        right: &'static str,
    },

    #[error("jump target {target} outside program of length {limit}")]
    InvalidJumpTarget { target: i32, limit: usize },

    #[error("case supplies {got} input(s), context names {expected}")]
    InputArityMismatch { expected: usize, got: usize },

    #[error("case index {index} out of range for {count} case(s)")]
    CaseOutOfRange { index: usize, count: usize },

    #[error("run exceeded the step limit of {limit}")]
    StepLimitExceeded { limit: u64 },
}

impl ExecError {
    pub fn unknown_local(name: impl Into<String>) -> Self {
        Self::UnknownLocal { name: name.into() }
    }

    pub fn unsupported_operands(op: Opcode, detail: impl Into<String>) -> Self {
        Self::UnsupportedOperands {
            op,
            detail: detail.into(),
        }
    }
}
