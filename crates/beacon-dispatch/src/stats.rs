//! Aggregate notification counter updates.

use std::sync::Arc;

use tracing::{error, warn};

use beacon_core::error::AppError;
use beacon_core::result::AppResult;
use beacon_core::types::AlertId;
use beacon_entity::dispatch::DispatchResult;

use crate::traits::AlertStore;

/// Applies a finalized [`DispatchResult`] to the alert's aggregate
/// counters.
///
/// Deliberately not idempotent: a resend legitimately adds to the
/// totals. `delivered` is incremented by the same delta as `sent` —
/// there is no delivery-receipt feedback loop, so a successful provider
/// send counts as delivered.
#[derive(Clone)]
pub struct StatsUpdater {
    alert_store: Arc<dyn AlertStore>,
}

impl StatsUpdater {
    /// Creates a new updater over the given alert store.
    pub fn new(alert_store: Arc<dyn AlertStore>) -> Self {
        Self { alert_store }
    }

    /// Apply the result's totals to the alert record in one atomic
    /// increment. Must only be called with a finalized result, never
    /// incrementally per send.
    pub async fn apply(&self, alert_id: AlertId, result: &DispatchResult) -> AppResult<()> {
        let sent = result.total_sent();
        if sent == 0 {
            return Ok(());
        }
        let channels = result.channels_used();
        self.alert_store
            .increment_notification_counters(alert_id, sent, sent, &channels)
            .await
            .map_err(|e| AppError::stats_write(format!("counter update failed: {e}")))
    }

    /// Apply with one retry. A stats failure is logged and swallowed:
    /// the dispatch already happened, and failing the call here would
    /// invite the caller to dispatch again.
    pub async fn apply_with_retry(&self, alert_id: AlertId, result: &DispatchResult) {
        match self.apply(alert_id, result).await {
            Ok(()) => {}
            Err(first) => {
                warn!(alert_id = %alert_id, error = %first, "stats write failed, retrying once");
                if let Err(second) = self.apply(alert_id, result).await {
                    error!(
                        alert_id = %alert_id,
                        error = %second,
                        sent = result.total_sent(),
                        "stats write failed after retry; counters not updated"
                    );
                }
            }
        }
    }
}
