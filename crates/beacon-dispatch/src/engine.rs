//! The notification engine facade.

use std::sync::Arc;

use tracing::info;

use beacon_core::config::EngineConfig;
use beacon_core::error::AppError;
use beacon_core::result::AppResult;
use beacon_core::types::UserId;
use beacon_entity::alert::Alert;
use beacon_entity::dispatch::{DispatchResult, RecipientSet};
use beacon_entity::user::UserRole;

use crate::coordinator::DispatchCoordinator;
use crate::resolver::{RecipientResolver, ResolveOptions};
use crate::stats::StatsUpdater;
use crate::traits::{AlertStore, EmailProvider, SmsProvider, UserStore};

/// Dependency-injected entry point for alert notification dispatch.
///
/// Holds the user store, channel providers, and alert store behind
/// capability traits; every collaborator can be a test double. A channel
/// counts as configured only when its provider is present **and** its
/// config section is enabled.
#[derive(Clone)]
pub struct NotificationEngine {
    resolver: RecipientResolver,
    coordinator: DispatchCoordinator,
    stats: StatsUpdater,
}

impl NotificationEngine {
    /// Creates a new engine.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        sms: Option<Arc<dyn SmsProvider>>,
        email: Option<Arc<dyn EmailProvider>>,
        alert_store: Arc<dyn AlertStore>,
        config: EngineConfig,
    ) -> Self {
        let sms = if config.sms.enabled { sms } else { None };
        let email = if config.email.enabled { email } else { None };

        Self {
            resolver: RecipientResolver::new(user_store),
            coordinator: DispatchCoordinator::new(sms, email, config.dispatch.clone()),
            stats: StatsUpdater::new(alert_store),
        }
    }

    /// Broad initial dispatch: resolve recipients from the alert's
    /// location, severity, and areas, fan out, then update counters.
    pub async fn send_alert_notifications(
        &self,
        alert: &Alert,
        options: ResolveOptions,
    ) -> AppResult<DispatchResult> {
        self.guard_status(alert)?;
        let recipients = self.resolver.resolve(alert, &options).await?;
        self.dispatch_and_record(alert, recipients).await
    }

    /// Ad-hoc resend to an explicit user list. Skips broad resolution.
    pub async fn send_targeted_notifications(
        &self,
        user_ids: &[UserId],
        alert: &Alert,
    ) -> AppResult<DispatchResult> {
        self.guard_status(alert)?;
        let recipients = self.resolver.resolve_ids(user_ids).await?;
        self.dispatch_and_record(alert, recipients).await
    }

    /// Resend to a role cohort. Skips broad resolution.
    pub async fn send_role_based_notifications(
        &self,
        role: UserRole,
        alert: &Alert,
    ) -> AppResult<DispatchResult> {
        self.guard_status(alert)?;
        let recipients = self.resolver.resolve_role(role).await?;
        self.dispatch_and_record(alert, recipients).await
    }

    /// Dispatch is only permitted for published, non-terminal alerts.
    fn guard_status(&self, alert: &Alert) -> AppResult<()> {
        if alert.status.allows_dispatch() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "alert {} has status '{}' and cannot be dispatched",
                alert.code, alert.status
            )))
        }
    }

    async fn dispatch_and_record(
        &self,
        alert: &Alert,
        recipients: RecipientSet,
    ) -> AppResult<DispatchResult> {
        let recipient_count = recipients.len();
        let result = self.coordinator.dispatch(alert, recipients).await;

        // Counters are applied only after the result is finalized; a
        // stats failure is retried and logged but never re-triggers the
        // dispatch or discards the result.
        self.stats.apply_with_retry(alert.id, &result).await;

        info!(
            alert_id = %alert.id,
            code = %alert.code,
            severity = %alert.severity,
            recipients = recipient_count,
            sms_sent = result.sms.sent,
            sms_failed = result.sms.failed,
            email_sent = result.email.sent,
            email_failed = result.email.failed,
            "alert dispatch complete"
        );

        Ok(result)
    }
}
