//! Alert urgency enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How soon responsive action is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Responsive action should be taken immediately.
    Immediate,
    /// Responsive action should be taken soon.
    Expected,
    /// Responsive action should be taken in the near future.
    Future,
    /// Responsive action is no longer required.
    Past,
    /// Urgency could not be determined.
    Unknown,
}

impl Urgency {
    /// Priority score multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Immediate => 1.0,
            Self::Expected => 0.8,
            Self::Future => 0.6,
            Self::Past => 0.2,
            Self::Unknown => 0.5,
        }
    }

    /// Return the urgency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Expected => "expected",
            Self::Future => "future",
            Self::Past => "past",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = beacon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "expected" => Ok(Self::Expected),
            "future" => Ok(Self::Future),
            "past" => Ok(Self::Past),
            "unknown" => Ok(Self::Unknown),
            _ => Err(beacon_core::AppError::validation(format!(
                "Invalid urgency: '{s}'. Expected one of: immediate, expected, future, past, unknown"
            ))),
        }
    }
}
