//! Search history configuration.

use std::env;

/// Default number of entries the history log keeps before evicting
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Configuration for the in-memory history log
#[derive(Clone, Debug)]
pub struct HistoryConfig {
    /// Maximum number of entries held at once; the oldest is evicted first
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let capacity = env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_HISTORY_CAPACITY);

        Self { capacity }
    }
}
