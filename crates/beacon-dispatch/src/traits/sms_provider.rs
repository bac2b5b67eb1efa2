//! SMS provider capability trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use beacon_core::result::AppResult;

/// Receipt returned by an SMS provider for an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsReceipt {
    /// Provider-assigned message identifier.
    pub id: String,
    /// Provider-reported status (e.g. "queued", "sent").
    pub status: String,
}

/// An external SMS gateway.
///
/// A returned error means this one message failed (rate limit, invalid
/// number, auth failure); the engine records it and moves on.
#[async_trait]
pub trait SmsProvider: Send + Sync + 'static {
    /// Send a single message to a phone number in E.164 format.
    async fn send(&self, to: &str, body: &str) -> AppResult<SmsReceipt>;
}
