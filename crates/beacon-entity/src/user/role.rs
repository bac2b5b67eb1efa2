//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the Beacon system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Publishes alerts and manages dispatch.
    Coordinator,
    /// Field emergency responder.
    Responder,
    /// Registered civil-defense volunteer.
    Volunteer,
    /// Regular registered resident.
    Citizen,
}

impl UserRole {
    /// Whether this role is unconditionally notified for severe and
    /// extreme alerts, regardless of location.
    pub fn is_emergency_personnel(&self) -> bool {
        matches!(self, Self::Admin | Self::Coordinator | Self::Responder)
    }

    /// The emergency-personnel roles, for the recipient override query.
    pub fn emergency_personnel() -> [UserRole; 3] {
        [Self::Coordinator, Self::Responder, Self::Admin]
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coordinator => "coordinator",
            Self::Responder => "responder",
            Self::Volunteer => "volunteer",
            Self::Citizen => "citizen",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = beacon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "coordinator" => Ok(Self::Coordinator),
            "responder" => Ok(Self::Responder),
            "volunteer" => Ok(Self::Volunteer),
            "citizen" => Ok(Self::Citizen),
            _ => Err(beacon_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, coordinator, responder, volunteer, citizen"
            ))),
        }
    }
}
