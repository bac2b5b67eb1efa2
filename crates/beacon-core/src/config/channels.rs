//! Notification channel configuration.

use serde::{Deserialize, Serialize};

/// SMS channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsChannelConfig {
    /// Whether the SMS channel is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Sender phone number in E.164 format.
    #[serde(default)]
    pub from_number: String,
}

impl Default for SmsChannelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            from_number: String::new(),
        }
    }
}

/// Email channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailChannelConfig {
    /// Whether the email channel is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sender address.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Human-readable sender name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for EmailChannelConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            from_address: default_from_address(),
            from_name: default_from_name(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_from_address() -> String {
    "alerts@beacon.local".to_string()
}

fn default_from_name() -> String {
    "Beacon Alerts".to_string()
}
