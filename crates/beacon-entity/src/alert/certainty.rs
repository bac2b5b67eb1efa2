//! Alert certainty enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Confidence in the observation or prediction behind an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    /// Determined to have occurred or to be ongoing.
    Observed,
    /// Likely (probability > ~50%).
    Likely,
    /// Possible but not likely.
    Possible,
    /// Not expected to occur.
    Unlikely,
    /// Certainty could not be determined.
    Unknown,
}

impl Certainty {
    /// Priority score multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Observed => 1.0,
            Self::Likely => 0.8,
            Self::Possible => 0.6,
            Self::Unlikely => 0.3,
            Self::Unknown => 0.1,
        }
    }

    /// Return the certainty as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Observed => "observed",
            Self::Likely => "likely",
            Self::Possible => "possible",
            Self::Unlikely => "unlikely",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Certainty {
    type Err = beacon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "observed" => Ok(Self::Observed),
            "likely" => Ok(Self::Likely),
            "possible" => Ok(Self::Possible),
            "unlikely" => Ok(Self::Unlikely),
            "unknown" => Ok(Self::Unknown),
            _ => Err(beacon_core::AppError::validation(format!(
                "Invalid certainty: '{s}'. Expected one of: observed, likely, possible, unlikely, unknown"
            ))),
        }
    }
}
