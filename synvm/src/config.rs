//! Engine configuration
//!
//! Limits and diagnostics for the driving loop. Configuration specifies
//! constraints only; enforcement happens in `run`.

/// Per-run engine settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on executed instructions per case, guarding against
    /// runaway backward jumps
    pub max_steps: u64,

    /// Collect a local-table dump after every step
    pub dump_locals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_steps: 1_000_000,
            dump_locals: false,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
