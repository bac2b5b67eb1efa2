//! Alert lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an alert.
///
/// Transitions: Draft → Active → { Update → Active, Cancel, Expired }.
/// Cancel and Expired are terminal; Expired is set by an external sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Composed but not yet published.
    Draft,
    /// Published and in effect.
    Active,
    /// Superseded by a newer revision, re-dispatch allowed.
    Update,
    /// Withdrawn by a coordinator. Terminal.
    Cancel,
    /// Past its expiration time. Terminal.
    Expired,
}

impl AlertStatus {
    /// Whether notification dispatch is permitted in this status.
    ///
    /// Cancelled and expired alerts must never notify; drafts are not
    /// yet published.
    pub fn allows_dispatch(&self) -> bool {
        matches!(self, Self::Active | Self::Update)
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancel | Self::Expired)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Update => "update",
            Self::Cancel => "cancel",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = beacon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "update" => Ok(Self::Update),
            "cancel" => Ok(Self::Cancel),
            "expired" => Ok(Self::Expired),
            _ => Err(beacon_core::AppError::validation(format!(
                "Invalid alert status: '{s}'. Expected one of: draft, active, update, cancel, expired"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_allowed_only_when_live() {
        assert!(AlertStatus::Active.allows_dispatch());
        assert!(AlertStatus::Update.allows_dispatch());
        assert!(!AlertStatus::Draft.allows_dispatch());
        assert!(!AlertStatus::Cancel.allows_dispatch());
        assert!(!AlertStatus::Expired.allows_dispatch());
    }
}
