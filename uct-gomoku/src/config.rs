use std::time::Duration;

// heuristics
pub const BASIC_REGIME_LIMIT: usize = 10;
pub const LOCALITY_LOG_BASE: f64 = 1.8;

// search
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(5);

/// Knobs for a single search call.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Wall-clock budget for one decision.
    pub budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            budget: DEFAULT_BUDGET,
        }
    }
}
