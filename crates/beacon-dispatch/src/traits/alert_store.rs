//! Alert store capability trait.

use async_trait::async_trait;

use beacon_core::result::AppResult;
use beacon_core::types::AlertId;
use beacon_entity::dispatch::Channel;

/// Write access to the external alert store for aggregate counters.
///
/// The increment must be atomic at the store (an `$inc`-style conditional
/// update), never read-modify-write, so concurrent resends cannot lose
/// updates.
#[async_trait]
pub trait AlertStore: Send + Sync + 'static {
    /// Add the given deltas to `notifications.sent` and
    /// `notifications.delivered`, and union `channels` into
    /// `notifications.channels`.
    async fn increment_notification_counters(
        &self,
        alert_id: AlertId,
        sent_delta: u64,
        delivered_delta: u64,
        channels: &[Channel],
    ) -> AppResult<()>;
}
