//! Dispatch outcome value objects.
//!
//! A dispatch call always produces a best-effort [`DispatchResult`] with
//! explicit per-channel counts and a bounded list of per-user failure
//! records. Partial failure is data here, not an error.

use serde::{Deserialize, Serialize};

use beacon_core::types::UserId;

use super::channel::Channel;

/// Per-channel send accounting for one dispatch invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelReport {
    /// Sends accepted by the provider.
    pub sent: u32,
    /// Sends rejected, errored, or timed out.
    pub failed: u32,
    /// Detail records for failures. Bounded by configuration; the
    /// `failed` counter stays exact beyond the cap.
    pub failures: Vec<SendFailure>,
}

/// One failed send attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendFailure {
    /// The recipient whose send failed.
    pub user_id: UserId,
    /// Recipient email, for operator-facing reports.
    pub email: String,
    /// Provider or timeout error message.
    pub reason: String,
}

impl ChannelReport {
    /// Record a successful send.
    pub fn record_sent(&mut self) {
        self.sent += 1;
    }

    /// Record a failed send, retaining the detail record only while the
    /// list is below `cap`.
    pub fn record_failure(&mut self, failure: SendFailure, cap: usize) {
        self.failed += 1;
        if self.failures.len() < cap {
            self.failures.push(failure);
        }
    }

    /// Total attempts accounted for.
    pub fn attempts(&self) -> u32 {
        self.sent + self.failed
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ChannelReport, cap: usize) {
        self.sent += other.sent;
        self.failed += other.failed;
        for failure in other.failures {
            if self.failures.len() >= cap {
                break;
            }
            self.failures.push(failure);
        }
    }
}

/// Aggregated outcome of one dispatch invocation across all channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchResult {
    /// SMS channel accounting.
    pub sms: ChannelReport,
    /// Email channel accounting.
    pub email: ChannelReport,
}

impl DispatchResult {
    /// Total successful sends across channels.
    pub fn total_sent(&self) -> u64 {
        u64::from(self.sms.sent) + u64::from(self.email.sent)
    }

    /// Total failed sends across channels.
    pub fn total_failed(&self) -> u64 {
        u64::from(self.sms.failed) + u64::from(self.email.failed)
    }

    /// Channels that carried at least one successful send.
    pub fn channels_used(&self) -> Vec<Channel> {
        let mut channels = Vec::new();
        if self.sms.sent > 0 {
            channels.push(Channel::Sms);
        }
        if self.email.sent > 0 {
            channels.push(Channel::Email);
        }
        channels
    }

    /// Fold a per-worker partial result into this accumulator.
    pub fn merge(&mut self, other: DispatchResult, cap: usize) {
        self.sms.merge(other.sms, cap);
        self.email.merge(other.email, cap);
    }
}
