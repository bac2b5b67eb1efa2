//! Capability traits for the engine's external collaborators.
//!
//! The engine is constructed against these traits so every collaborator
//! can be replaced by a test double. Implementations live outside this
//! workspace (document store adapters, provider SDK wrappers).

pub mod alert_store;
pub mod email_provider;
pub mod sms_provider;
pub mod user_store;

pub use alert_store::AlertStore;
pub use email_provider::{EmailProvider, EmailReceipt};
pub use sms_provider::{SmsProvider, SmsReceipt};
pub use user_store::UserStore;
