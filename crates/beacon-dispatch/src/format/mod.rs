//! Channel-specific message rendering.

pub mod email;
pub mod sms;

pub use email::{EmailMessage, email_message};
pub use sms::sms_body;
