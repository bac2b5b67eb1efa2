//! Shared value types used across the Beacon crates.

pub mod geo;
pub mod id;

pub use geo::GeoPoint;
pub use id::{AlertId, UserId};
