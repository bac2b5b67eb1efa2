//! Per-user, per-channel eligibility rules.

use beacon_entity::alert::Alert;
use beacon_entity::dispatch::Channel;
use beacon_entity::user::User;

/// Pure eligibility predicate gating whether a given user should receive
/// a given channel's message for a given alert.
///
/// Constructed from which channels are configured at the system level;
/// an unconfigured channel is ineligible for everyone, which is how the
/// "zero configured channels" case degrades to a no-op dispatch.
#[derive(Debug, Clone, Copy)]
pub struct ChannelGate {
    sms_available: bool,
    email_available: bool,
}

impl ChannelGate {
    /// Creates a gate from system-level channel availability.
    pub fn new(sms_available: bool, email_available: bool) -> Self {
        Self {
            sms_available,
            email_available,
        }
    }

    /// Whether `user` should receive `alert` on `channel`.
    pub fn eligible(&self, user: &User, alert: &Alert, channel: Channel) -> bool {
        match channel {
            Channel::Sms => self.sms_eligible(user, alert),
            Channel::Email => self.email_eligible(user),
        }
    }

    /// SMS requires a phone number, the master toggle, and the severity-
    /// appropriate tier: "emergencies" for severe/extreme, "alerts"
    /// below.
    fn sms_eligible(&self, user: &User, alert: &Alert) -> bool {
        if !self.sms_available || user.phone.is_none() || !user.preferences.sms.enabled {
            return false;
        }
        if alert.severity.is_emergency() {
            user.preferences.sms.emergencies
        } else {
            user.preferences.sms.alerts
        }
    }

    /// Email has no emergency tier; the master toggle plus the single
    /// "alerts" flag cover every severity. Intentional asymmetry with SMS.
    fn email_eligible(&self, user: &User) -> bool {
        self.email_available && user.preferences.email.enabled && user.preferences.email.alerts
    }
}
