//! Alert hazard kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of hazard an alert describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Flood,
    Wildfire,
    Earthquake,
    Storm,
    Heat,
    Chemical,
    Other,
}

impl AlertKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Wildfire => "wildfire",
            Self::Earthquake => "earthquake",
            Self::Storm => "storm",
            Self::Heat => "heat",
            Self::Chemical => "chemical",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
