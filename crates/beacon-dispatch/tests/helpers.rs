//! Shared test helpers: in-memory collaborator doubles and entity builders.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use beacon_core::config::EngineConfig;
use beacon_core::error::AppError;
use beacon_core::result::AppResult;
use beacon_core::types::{AlertId, GeoPoint, UserId};
use beacon_dispatch::traits::{
    AlertStore, EmailProvider, EmailReceipt, SmsProvider, SmsReceipt, UserStore,
};
use beacon_dispatch::NotificationEngine;
use beacon_entity::alert::{AffectedArea, Alert, AlertKind, Certainty, Severity, Urgency};
use beacon_entity::dispatch::Channel;
use beacon_entity::user::{NotificationPreferences, User, UserProfile, UserRole, UserStatus};

/// In-memory user store with the reference matching semantics.
#[derive(Default)]
pub struct InMemoryUserStore {
    pub users: Vec<User>,
    /// When true, every query fails as if the store were unreachable.
    pub unreachable: bool,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            unreachable: false,
        }
    }

    fn check_reachable(&self) -> AppResult<()> {
        if self.unreachable {
            Err(AppError::external_service("user store unreachable"))
        } else {
            Ok(())
        }
    }

    fn eligible(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.is_notifiable())
    }

    fn role_matches(user: &User, roles: Option<&[UserRole]>) -> bool {
        roles.is_none_or(|rs| rs.contains(&user.role))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_eligible(&self, roles: Option<&[UserRole]>) -> AppResult<Vec<User>> {
        self.check_reachable()?;
        Ok(self
            .eligible()
            .filter(|u| Self::role_matches(u, roles))
            .cloned()
            .collect())
    }

    async fn find_eligible_by_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        roles: Option<&[UserRole]>,
    ) -> AppResult<Vec<User>> {
        self.check_reachable()?;
        Ok(self
            .eligible()
            .filter(|u| Self::role_matches(u, roles))
            .filter(|u| {
                u.location
                    .map(|loc| center.within_km(&loc, radius_km))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn find_by_area_names(
        &self,
        names: &[String],
        roles: Option<&[UserRole]>,
    ) -> AppResult<Vec<User>> {
        self.check_reachable()?;
        Ok(self
            .eligible()
            .filter(|u| Self::role_matches(u, roles))
            .filter(|u| {
                [&u.profile.organization, &u.profile.city, &u.profile.state]
                    .into_iter()
                    .flatten()
                    .any(|field| names.iter().any(|name| field.contains(name)))
            })
            .cloned()
            .collect())
    }

    async fn find_by_roles(&self, roles: &[UserRole]) -> AppResult<Vec<User>> {
        self.check_reachable()?;
        Ok(self
            .eligible()
            .filter(|u| roles.contains(&u.role))
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        self.check_reachable()?;
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

/// Recording SMS provider that can fail selected phone numbers.
#[derive(Default)]
pub struct RecordingSmsProvider {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failing_numbers: HashSet<String>,
}

#[async_trait]
impl SmsProvider for RecordingSmsProvider {
    async fn send(&self, to: &str, body: &str) -> AppResult<SmsReceipt> {
        if self.failing_numbers.contains(to) {
            return Err(AppError::channel_send("invalid number"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(SmsReceipt {
            id: format!("sms-{}", self.sent.lock().unwrap().len()),
            status: "queued".to_string(),
        })
    }
}

/// SMS provider that stalls longer than any configured send timeout.
pub struct SlowSmsProvider {
    pub delay: std::time::Duration,
}

#[async_trait]
impl SmsProvider for SlowSmsProvider {
    async fn send(&self, _to: &str, _body: &str) -> AppResult<SmsReceipt> {
        tokio::time::sleep(self.delay).await;
        Ok(SmsReceipt {
            id: "sms-slow".to_string(),
            status: "queued".to_string(),
        })
    }
}

/// SMS provider whose send panics, as a misbehaving integration would.
#[derive(Default)]
pub struct PanickingSmsProvider;

#[async_trait]
impl SmsProvider for PanickingSmsProvider {
    async fn send(&self, _to: &str, _body: &str) -> AppResult<SmsReceipt> {
        panic!("sms client crashed");
    }
}

/// Recording email provider that can fail selected addresses.
#[derive(Default)]
pub struct RecordingEmailProvider {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failing_addresses: HashSet<String>,
}

#[async_trait]
impl EmailProvider for RecordingEmailProvider {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        _text: &str,
        _html: &str,
    ) -> AppResult<EmailReceipt> {
        if self.failing_addresses.contains(to) {
            return Err(AppError::channel_send("mailbox rejected"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(EmailReceipt {
            id: format!("mail-{}", self.sent.lock().unwrap().len()),
        })
    }
}

/// Recording alert store that can simulate counter-write failures.
#[derive(Default)]
pub struct RecordingAlertStore {
    pub increments: Mutex<Vec<(AlertId, u64, u64, Vec<Channel>)>>,
    /// Number of leading calls that fail before writes start succeeding.
    pub failures_before_success: Mutex<u32>,
}

#[async_trait]
impl AlertStore for RecordingAlertStore {
    async fn increment_notification_counters(
        &self,
        alert_id: AlertId,
        sent_delta: u64,
        delivered_delta: u64,
        channels: &[Channel],
    ) -> AppResult<()> {
        let mut remaining = self.failures_before_success.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(AppError::external_service("alert store write failed"));
        }
        self.increments.lock().unwrap().push((
            alert_id,
            sent_delta,
            delivered_delta,
            channels.to_vec(),
        ));
        Ok(())
    }
}

/// A published alert at the given severity, centered on (0, 0).
pub fn active_alert(severity: Severity) -> Alert {
    let now = Utc::now();
    let mut alert = Alert::new(
        "TEST-2026-0001",
        AlertKind::Flood,
        severity,
        Urgency::Immediate,
        Some(Certainty::Observed),
        "River flooding",
        "The river has exceeded flood stage.",
        now,
        now + Duration::hours(6),
    );
    alert.location = Some(GeoPoint::new(0.0, 0.0));
    alert.activate();
    alert
}

pub fn area(name: &str) -> AffectedArea {
    AffectedArea {
        name: name.to_string(),
        point: None,
        population: None,
    }
}

/// An active, verified citizen with every channel preference off.
pub fn user(name: &str) -> User {
    User {
        id: UserId::new(),
        email: format!("{name}@example.org"),
        first_name: name.to_string(),
        last_name: "Test".to_string(),
        role: UserRole::Citizen,
        status: UserStatus::Active,
        email_verified: true,
        phone: None,
        location: None,
        profile: UserProfile::default(),
        preferences: NotificationPreferences {
            sms: beacon_entity::user::SmsPreferences {
                enabled: false,
                emergencies: false,
                alerts: false,
            },
            email: beacon_entity::user::EmailPreferences {
                enabled: false,
                alerts: false,
            },
        },
        created_at: Utc::now(),
    }
}

/// A user close to the alert origin with SMS fully enabled.
pub fn sms_user(name: &str, phone: &str) -> User {
    let mut u = user(name);
    u.phone = Some(phone.to_string());
    u.location = Some(GeoPoint::new(0.05, 0.05));
    u.preferences.sms.enabled = true;
    u.preferences.sms.emergencies = true;
    u.preferences.sms.alerts = true;
    u
}

/// Engine configuration with both channels enabled and low concurrency.
pub fn test_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.sms.enabled = true;
    config.email.enabled = true;
    config.dispatch.concurrency = 4;
    config.dispatch.send_timeout_seconds = 5;
    config
}

/// Wire an engine from the given doubles.
pub fn engine(
    store: Arc<InMemoryUserStore>,
    sms: Option<Arc<RecordingSmsProvider>>,
    email: Option<Arc<RecordingEmailProvider>>,
    alerts: Arc<RecordingAlertStore>,
    config: EngineConfig,
) -> NotificationEngine {
    NotificationEngine::new(
        store,
        sms.map(|p| p as Arc<dyn SmsProvider>),
        email.map(|p| p as Arc<dyn EmailProvider>),
        alerts,
        config,
    )
}
