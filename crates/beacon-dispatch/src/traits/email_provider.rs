//! Email provider capability trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use beacon_core::result::AppResult;

/// Receipt returned by an email provider for an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    /// Provider-assigned message identifier.
    pub id: String,
}

/// An external email delivery service.
///
/// A returned error means this one message failed; the engine records it
/// and moves on.
#[async_trait]
pub trait EmailProvider: Send + Sync + 'static {
    /// Send a single message with both plain-text and HTML bodies.
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str)
    -> AppResult<EmailReceipt>;
}
