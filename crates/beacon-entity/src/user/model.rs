//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use beacon_core::types::{GeoPoint, UserId};

use super::preference::NotificationPreferences;
use super::role::UserRole;
use super::status::UserStatus;

/// A registered user eligible for alert notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Given name, used in message greetings.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// User role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// Phone number in E.164 format, required for SMS delivery.
    pub phone: Option<String>,
    /// Last known location.
    pub location: Option<GeoPoint>,
    /// Profile fields used as an area-match fallback.
    pub profile: UserProfile,
    /// Notification delivery preferences.
    pub preferences: NotificationPreferences,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Optional profile strings matched against affected-area names when
/// geo targeting finds nobody.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Organization the user belongs to.
    pub organization: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// State or province of residence.
    pub state: Option<String>,
}

impl User {
    /// Whether this user may be targeted by notifications at all:
    /// account active and email verified.
    pub fn is_notifiable(&self) -> bool {
        self.status.is_active() && self.email_verified
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
