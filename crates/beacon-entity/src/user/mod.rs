//! User entity, role/status enums, and notification preferences.

pub mod model;
pub mod preference;
pub mod role;
pub mod status;

pub use model::{User, UserProfile};
pub use preference::{EmailPreferences, NotificationPreferences, SmsPreferences};
pub use role::UserRole;
pub use status::UserStatus;
