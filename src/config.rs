use crate::scenario::Kind;
use std::sync::OnceLock;

/// Fixture run configuration.
#[derive(Debug)]
pub struct RunConfig {
    /// Suppress progress logging (diagnostic lines are printed regardless).
    pub quiet: bool,
    /// Demonstrations to run, in run order.
    pub scenarios: Vec<Kind>,
}

/// Read-only run configuration (set only once, at fixture start).
static CONFIG: OnceLock<RunConfig> = OnceLock::new();

/// Set initial configuration.
pub fn set(config: RunConfig) {
    CONFIG.set(config).expect("should called once");
}

/// Return fixture run config.
pub fn current() -> &'static RunConfig {
    CONFIG.get().expect("should already be set")
}
