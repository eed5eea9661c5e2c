//! SynVM Engine Library
//!
//! A minimal bytecode execution engine for evaluating short candidate
//! programs against harness-supplied test cases. The harness hands the
//! engine an instruction sequence and a context of named inputs; each
//! case runs in its own isolated state and yields a return value that is
//! judged against an expected value with a tolerance-aware comparator.

pub mod compare;
pub mod config;
pub mod context;
pub mod error;
pub mod harness;
pub mod interp;
pub mod program;
pub mod state;
pub mod value;

pub use compare::compare;
pub use config::EngineConfig;
pub use context::{Case, Context};
pub use error::{ExecError, ExecResult};
pub use harness::{expected_matches, run_case, run_cases, CaseOutcome};
pub use program::{Instruction, Opcode, Param};
pub use state::{ExecState, Local};
pub use value::Value;
