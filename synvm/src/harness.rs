//! Per-case driver
//!
//! Seeds one fresh state per case and runs each to completion. A failing
//! case is reported in its outcome and never stops the batch; cases share
//! only the read-only program and context.

use crate::compare::compare;
use crate::config::EngineConfig;
use crate::context::Context;
use crate::error::ExecResult;
use crate::program::Instruction;
use crate::state::ExecState;
use crate::value::Value;

/// Everything observable from one case's run
#[derive(Debug)]
pub struct CaseOutcome {
    pub case_index: usize,
    /// The captured return value, `None` if the program fell off the end
    /// without a RET, or the error that aborted this case
    pub result: ExecResult<Option<Value>>,
    /// PRINT side-channel lines
    pub prints: Vec<String>,
    /// Local-table dumps, when `dump_locals` is configured
    pub trace: Vec<String>,
}

/// Run the program once per case in the context.
pub fn run_cases(
    program: &[Instruction],
    ctx: &Context,
    config: &EngineConfig,
) -> Vec<CaseOutcome> {
    (0..ctx.case_count())
        .map(|case_index| run_case(program, ctx, config, case_index))
        .collect()
}

/// Run the program against a single case.
pub fn run_case(
    program: &[Instruction],
    ctx: &Context,
    config: &EngineConfig,
    case_index: usize,
) -> CaseOutcome {
    match ExecState::for_case(program, ctx, case_index) {
        Ok(mut state) => {
            let result = state.run(config);
            CaseOutcome {
                case_index,
                result,
                prints: state.prints,
                trace: state.trace,
            }
        }
        Err(err) => CaseOutcome {
            case_index,
            result: Err(err),
            prints: Vec::new(),
            trace: Vec::new(),
        },
    }
}

/// Judge a case's outcome against an expected value with the context's
/// tolerance. A failed or result-less run never matches.
pub fn expected_matches(
    ctx: &Context,
    outcome: &CaseOutcome,
    expected: &Value,
) -> ExecResult<bool> {
    match &outcome.result {
        Ok(Some(value)) => compare(ctx, value, expected),
        Ok(None) => Ok(false),
        Err(err) => Err(err.clone()),
    }
}
