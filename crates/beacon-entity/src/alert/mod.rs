//! Alert entity, enumerations, and priority scoring.

pub mod certainty;
pub mod kind;
pub mod model;
pub mod priority;
pub mod severity;
pub mod status;
pub mod urgency;

pub use certainty::Certainty;
pub use kind::AlertKind;
pub use model::{AffectedArea, Alert, AlertSource, NotificationStats};
pub use priority::priority_score;
pub use severity::Severity;
pub use status::AlertStatus;
pub use urgency::Urgency;
