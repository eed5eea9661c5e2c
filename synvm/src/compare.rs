//! Tolerance-aware result comparison
//!
//! Used by the driving harness to judge whether a run's result matches an
//! expected value. Not used by the CMP instruction, which is exact and
//! int-only.

use crate::context::Context;
use crate::error::{ExecError, ExecResult};
use crate::value::Value;

/// Compare two values under the context's precision setting.
///
/// Int vs Int is exact equality. Float vs Float is a band check,
/// `right - tol <= left <= right + tol`, defined only when the context's
/// precision is itself a Float. Every other tag pairing is unsupported.
pub fn compare(ctx: &Context, left: &Value, right: &Value) -> ExecResult<bool> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok(l == r),
        (Value::Float(l), Value::Float(r)) => match ctx.precision {
            Value::Float(tol) => Ok(*l >= *r - tol && *l <= *r + tol),
            _ => Err(ExecError::UnsupportedComparison {
                left: left.type_name(),
                right: right.type_name(),
            }),
        },
        _ => Err(ExecError::UnsupportedComparison {
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}
