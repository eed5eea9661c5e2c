//! Harness-supplied execution context
//!
//! Built once by the external loader and read-only for the engine's
//! lifetime. Each case supplies concrete values for the named inputs,
//! aligned positionally with `input_names`.

use crate::error::{ExecError, ExecResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One concrete set of input values for a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub inputs: Vec<Value>,
}

impl Case {
    pub fn new(inputs: Vec<Value>) -> Self {
        Case { inputs }
    }
}

/// Named inputs, their per-case values, and the comparison tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Ordered input parameter names
    pub input_names: Vec<String>,
    /// One entry per case, each aligned with `input_names`
    pub cases: Vec<Case>,
    /// Allowed absolute deviation for float comparison; must itself be
    /// a Float for float comparisons to be defined
    pub precision: Value,
}

impl Context {
    pub fn new(input_names: Vec<String>, cases: Vec<Case>, precision: Value) -> Self {
        Context {
            input_names,
            cases,
            precision,
        }
    }

    /// Checked case access
    pub fn case(&self, index: usize) -> ExecResult<&Case> {
        self.cases.get(index).ok_or(ExecError::CaseOutOfRange {
            index,
            count: self.cases.len(),
        })
    }

    /// Number of cases
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}
