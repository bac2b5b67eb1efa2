//! Notification preference value types.
//!
//! Preferences are explicit non-optional booleans with serde defaults so
//! that the channel eligibility rules never have to null-check nested
//! paths.

use serde::{Deserialize, Serialize};

/// Per-user notification delivery preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// SMS channel preferences.
    #[serde(default)]
    pub sms: SmsPreferences,
    /// Email channel preferences.
    #[serde(default)]
    pub email: EmailPreferences,
}

/// SMS delivery preferences.
///
/// `emergencies` applies to severe and extreme alerts, `alerts` to
/// everything below. The two tiers are independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsPreferences {
    /// Master toggle for the SMS channel.
    #[serde(default)]
    pub enabled: bool,
    /// Receive severe and extreme alerts.
    #[serde(default = "default_true")]
    pub emergencies: bool,
    /// Receive alerts below the emergency tier.
    #[serde(default)]
    pub alerts: bool,
}

/// Email delivery preferences.
///
/// Email has no separate emergency tier; `alerts` covers every severity.
/// This asymmetry with SMS is intentional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPreferences {
    /// Master toggle for the email channel.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Receive alert emails.
    #[serde(default = "default_true")]
    pub alerts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SmsPreferences {
    fn default() -> Self {
        Self {
            enabled: false,
            emergencies: true,
            alerts: false,
        }
    }
}

impl Default for EmailPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            alerts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(!prefs.sms.enabled);
        assert!(prefs.sms.emergencies);
        assert!(prefs.email.enabled);
        assert!(prefs.email.alerts);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"sms": {"enabled": true}}"#).unwrap();
        assert!(prefs.sms.enabled);
        assert!(prefs.sms.emergencies);
        assert!(!prefs.sms.alerts);
        assert!(prefs.email.enabled);
    }
}
