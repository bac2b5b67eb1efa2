//! Concurrent per-recipient dispatch with partial-failure isolation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, warn};

use beacon_core::config::dispatch::DispatchConfig;
use beacon_entity::alert::Alert;
use beacon_entity::dispatch::{Channel, DispatchResult, SendFailure};
use beacon_entity::user::User;

use crate::format::{email_message, sms_body};
use crate::gate::ChannelGate;
use crate::traits::{EmailProvider, SmsProvider};

/// Fans a resolved recipient set out across the configured channels.
///
/// Recipients are processed concurrently under a semaphore-bounded task
/// set; each task produces a partial [`DispatchResult`] that is merged
/// serially as tasks join, so no counter is ever shared mutably across
/// sends. One user's failure never aborts the batch and one channel's
/// failure never blocks the other. The coordinator performs no alert
/// mutation.
#[derive(Clone)]
pub struct DispatchCoordinator {
    sms: Option<Arc<dyn SmsProvider>>,
    email: Option<Arc<dyn EmailProvider>>,
    gate: ChannelGate,
    config: DispatchConfig,
}

impl DispatchCoordinator {
    /// Creates a coordinator over the configured providers. A `None`
    /// provider means that channel is unavailable and is skipped for all
    /// recipients without error.
    pub fn new(
        sms: Option<Arc<dyn SmsProvider>>,
        email: Option<Arc<dyn EmailProvider>>,
        config: DispatchConfig,
    ) -> Self {
        let gate = ChannelGate::new(sms.is_some(), email.is_some());
        Self {
            sms,
            email,
            gate,
            config,
        }
    }

    /// The eligibility gate derived from provider availability.
    pub fn gate(&self) -> ChannelGate {
        self.gate
    }

    /// Dispatch the alert to every recipient. Always returns a result;
    /// per-attempt failures are recorded, never raised.
    pub async fn dispatch(
        &self,
        alert: &Alert,
        recipients: impl IntoIterator<Item = User>,
    ) -> DispatchResult {
        let mut total = DispatchResult::default();

        if self.sms.is_none() && self.email.is_none() {
            debug!(alert_id = %alert.id, "no channels configured, dispatch is a no-op");
            return total;
        }

        let alert = Arc::new(alert.clone());
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let send_timeout = Duration::from_secs(self.config.send_timeout_seconds);
        let cap = self.config.max_recorded_failures;

        let mut tasks = JoinSet::new();
        // Gated channels per task, so a recipient whose task dies can
        // still be accounted as failed rather than vanishing.
        let mut pending = HashMap::new();
        for user in recipients {
            let sms_gated = self.gate.eligible(&user, &alert, Channel::Sms);
            let email_gated = self.gate.eligible(&user, &alert, Channel::Email);
            let entry = (user.id, user.email.clone(), sms_gated, email_gated);

            let alert = Arc::clone(&alert);
            let semaphore = Arc::clone(&semaphore);
            let sms = self.sms.clone();
            let email = self.email.clone();
            let gate = self.gate;
            let handle = tasks.spawn(async move {
                // The semaphore is never closed, so acquisition only
                // fails if the coordinator is torn down mid-dispatch.
                let _permit = semaphore.acquire_owned().await.ok();
                process_recipient(&alert, &user, gate, sms, email, send_timeout, cap).await
            });
            pending.insert(handle.id(), entry);
        }

        // Single serialization point: partial results merge as tasks
        // join, in completion order.
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((task_id, partial)) => {
                    pending.remove(&task_id);
                    total.merge(partial, cap);
                }
                Err(e) => {
                    warn!(alert_id = %alert.id, error = %e, "recipient dispatch task failed");
                    if let Some((user_id, email, sms_gated, email_gated)) =
                        pending.remove(&e.id())
                    {
                        let reason = format!("dispatch task failed: {e}");
                        if sms_gated {
                            total.sms.record_failure(
                                SendFailure {
                                    user_id,
                                    email: email.clone(),
                                    reason: reason.clone(),
                                },
                                cap,
                            );
                        }
                        if email_gated {
                            total.email.record_failure(
                                SendFailure {
                                    user_id,
                                    email,
                                    reason,
                                },
                                cap,
                            );
                        }
                    }
                }
            }
        }

        total
    }
}

/// Process one recipient: each eligible channel independently formatted,
/// sent under a timeout, and accounted. Nothing escapes.
async fn process_recipient(
    alert: &Alert,
    user: &User,
    gate: ChannelGate,
    sms: Option<Arc<dyn SmsProvider>>,
    email: Option<Arc<dyn EmailProvider>>,
    send_timeout: Duration,
    cap: usize,
) -> DispatchResult {
    let mut partial = DispatchResult::default();

    if let Some(provider) = sms
        && gate.eligible(user, alert, Channel::Sms)
        && let Some(phone) = &user.phone
    {
        let body = sms_body(alert);
        match timeout(send_timeout, provider.send(phone, &body)).await {
            Ok(Ok(receipt)) => {
                debug!(alert_id = %alert.id, user_id = %user.id, sms_id = %receipt.id, "sms sent");
                partial.sms.record_sent();
            }
            Ok(Err(e)) => {
                warn!(alert_id = %alert.id, user_id = %user.id, error = %e, "sms send failed");
                partial.sms.record_failure(failure(user, e.to_string()), cap);
            }
            Err(_) => {
                warn!(alert_id = %alert.id, user_id = %user.id, "sms send timed out");
                partial.sms.record_failure(
                    failure(user, format!("send timed out after {}s", send_timeout.as_secs())),
                    cap,
                );
            }
        }
    }

    if let Some(provider) = email
        && gate.eligible(user, alert, Channel::Email)
    {
        let message = email_message(alert, user);
        match timeout(
            send_timeout,
            provider.send(&user.email, &message.subject, &message.text, &message.html),
        )
        .await
        {
            Ok(Ok(receipt)) => {
                debug!(alert_id = %alert.id, user_id = %user.id, email_id = %receipt.id, "email sent");
                partial.email.record_sent();
            }
            Ok(Err(e)) => {
                warn!(alert_id = %alert.id, user_id = %user.id, error = %e, "email send failed");
                partial.email.record_failure(failure(user, e.to_string()), cap);
            }
            Err(_) => {
                warn!(alert_id = %alert.id, user_id = %user.id, "email send timed out");
                partial.email.record_failure(
                    failure(user, format!("send timed out after {}s", send_timeout.as_secs())),
                    cap,
                );
            }
        }
    }

    partial
}

fn failure(user: &User, reason: String) -> SendFailure {
    SendFailure {
        user_id: user.id,
        email: user.email.clone(),
        reason,
    }
}
