//! Dispatch fan-out configuration.

use serde::{Deserialize, Serialize};

/// Notification dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Number of recipients processed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Timeout in seconds applied to each provider send attempt.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
    /// Maximum number of per-user failure records retained per channel.
    /// Counters stay exact beyond the cap; only the detail list is bounded.
    #[serde(default = "default_max_recorded_failures")]
    pub max_recorded_failures: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            send_timeout_seconds: default_send_timeout(),
            max_recorded_failures: default_max_recorded_failures(),
        }
    }
}

fn default_concurrency() -> usize {
    8
}

fn default_send_timeout() -> u64 {
    10
}

fn default_max_recorded_failures() -> usize {
    100
}
