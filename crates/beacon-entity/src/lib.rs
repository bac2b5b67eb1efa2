//! # beacon-entity
//!
//! Domain entity models for the Beacon alert engine. Every struct in this
//! crate represents an externally stored record or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod alert;
pub mod dispatch;
pub mod user;
