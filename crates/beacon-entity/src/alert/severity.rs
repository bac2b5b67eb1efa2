//! Alert severity enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an alert.
///
/// Variants are declared in ascending order so the derived `Ord`
/// matches the domain ordering: Unknown < Info < Minor < Moderate <
/// Severe < Extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Severity could not be determined.
    Unknown,
    /// Informational, no immediate threat.
    Info,
    /// Minor threat to life or property.
    Minor,
    /// Possible threat to life or property.
    Moderate,
    /// Significant threat to life or property.
    Severe,
    /// Extraordinary threat to life or property.
    Extreme,
}

impl Severity {
    /// Base priority score contribution, 0..=100.
    pub fn base_score(&self) -> f64 {
        match self {
            Self::Unknown => 0.0,
            Self::Info => 10.0,
            Self::Minor => 25.0,
            Self::Moderate => 50.0,
            Self::Severe => 75.0,
            Self::Extreme => 100.0,
        }
    }

    /// Default geo-targeting radius in kilometers for this severity.
    ///
    /// Unknown severity targets the Moderate radius.
    pub fn default_radius_km(&self) -> f64 {
        match self {
            Self::Info => 10.0,
            Self::Minor => 20.0,
            Self::Moderate | Self::Unknown => 50.0,
            Self::Severe => 100.0,
            Self::Extreme => 200.0,
        }
    }

    /// Whether this severity activates emergency handling: the
    /// emergency-personnel recipient override and the SMS "emergencies"
    /// preference tier.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Severe | Self::Extreme)
    }

    /// Color used for severity badges in HTML email bodies.
    pub fn html_color(&self) -> &'static str {
        match self {
            Self::Unknown => "#757575",
            Self::Info => "#1976d2",
            Self::Minor => "#388e3c",
            Self::Moderate => "#ffa000",
            Self::Severe => "#f57c00",
            Self::Extreme => "#d32f2f",
        }
    }

    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = beacon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "info" => Ok(Self::Info),
            "minor" => Ok(Self::Minor),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            "extreme" => Ok(Self::Extreme),
            _ => Err(beacon_core::AppError::validation(format!(
                "Invalid severity: '{s}'. Expected one of: unknown, info, minor, moderate, severe, extreme"
            ))),
        }
    }
}
