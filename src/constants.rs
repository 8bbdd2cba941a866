//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the monitor cadence, only edit this file.

/// Default interval between simulated packets (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;

/// Default interval between stats log lines (seconds)
pub const DEFAULT_STATS_INTERVAL_SECS: u64 = 5;

/// Model version tag attached to every detection record
pub const MODEL_VERSION: &str = "v1.0-ensemble";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "NetWatch";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get packet tick interval from environment or use default
pub fn get_tick_interval_ms() -> u64 {
    std::env::var("NETWATCH_TICK_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
}

/// Get stats interval from environment or use default
pub fn get_stats_interval_secs() -> u64 {
    std::env::var("NETWATCH_STATS_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_STATS_INTERVAL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 2_000);
        assert_eq!(MODEL_VERSION, "v1.0-ensemble");
    }
}
