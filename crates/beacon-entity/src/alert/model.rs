//! Alert entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use beacon_core::types::{AlertId, GeoPoint};

use crate::dispatch::Channel;

use super::certainty::Certainty;
use super::kind::AlertKind;
use super::priority::priority_score;
use super::severity::Severity;
use super::status::AlertStatus;
use super::urgency::Urgency;

/// An emergency alert published by a coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: AlertId,
    /// Human-readable identifying code (e.g. "FLOOD-2026-0142").
    pub code: String,
    /// Kind of hazard.
    pub kind: AlertKind,
    /// Severity of the hazard.
    pub severity: Severity,
    /// How soon action is required.
    pub urgency: Urgency,
    /// Confidence in the observation or prediction.
    pub certainty: Option<Certainty>,
    /// Short headline.
    pub title: String,
    /// Full description of the hazard.
    pub description: String,
    /// Recommended protective actions, if any.
    pub instructions: Option<String>,
    /// Primary point location of the hazard.
    pub location: Option<GeoPoint>,
    /// Named affected areas.
    pub affected_areas: Vec<AffectedArea>,
    /// When the alert takes effect.
    pub effective_at: DateTime<Utc>,
    /// When the alert expires.
    pub expires_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: AlertStatus,
    /// Derived urgency score, 0..=100. Recomputed on every mutation;
    /// never settable independently.
    pub priority_score: u8,
    /// Aggregate notification delivery counters.
    pub notifications: NotificationStats,
    /// Issuing organization, if known.
    pub source: Option<AlertSource>,
    /// Monotonically incrementing revision counter.
    pub version: u32,
    /// When the alert was created.
    pub created_at: DateTime<Utc>,
    /// When the alert was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A named area affected by an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffectedArea {
    /// Area name as published (e.g. "Riverside").
    pub name: String,
    /// Representative point of the area, if known.
    pub point: Option<GeoPoint>,
    /// Estimated resident population, if known.
    pub population: Option<u64>,
}

/// The organization that issued an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertSource {
    /// Issuing organization name.
    pub organization: String,
    /// Contact information (phone or email).
    pub contact: Option<String>,
}

/// Aggregate notification counters stored on the alert.
///
/// `delivered` mirrors `sent`: there is no delivery-receipt feedback
/// loop, so a successful provider send counts as delivered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationStats {
    /// Total messages successfully handed to a provider.
    pub sent: u64,
    /// Total messages assumed delivered (equals `sent`).
    pub delivered: u64,
    /// Total acknowledgements received from recipients.
    pub acknowledged: u64,
    /// Channels that have carried at least one successful send.
    pub channels: BTreeSet<Channel>,
}

impl Alert {
    /// Create a new draft alert. The priority score is computed at
    /// construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        kind: AlertKind,
        severity: Severity,
        urgency: Urgency,
        certainty: Option<Certainty>,
        title: impl Into<String>,
        description: impl Into<String>,
        effective_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        let mut alert = Self {
            id: AlertId::new(),
            code: code.into(),
            kind,
            severity,
            urgency,
            certainty,
            title: title.into(),
            description: description.into(),
            instructions: None,
            location: None,
            affected_areas: Vec::new(),
            effective_at,
            expires_at,
            status: AlertStatus::Draft,
            priority_score: 0,
            notifications: NotificationStats::default(),
            source: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        alert.refresh_priority();
        alert
    }

    /// Recompute the priority score from the current severity, urgency,
    /// and certainty. Called by every mutating method.
    pub fn refresh_priority(&mut self) {
        self.priority_score = priority_score(self.severity, self.urgency, self.certainty);
    }

    /// Publish a draft alert.
    pub fn activate(&mut self) {
        self.status = AlertStatus::Active;
        self.touch();
    }

    /// Revise the alert content. Bumps the version and re-enters the
    /// Update status so a re-dispatch is permitted.
    pub fn mark_updated(&mut self) {
        self.status = AlertStatus::Update;
        self.version += 1;
        self.touch();
    }

    /// Withdraw the alert. Terminal; dispatch is refused afterwards.
    pub fn cancel(&mut self) {
        self.status = AlertStatus::Cancel;
        self.touch();
    }

    /// Mark the alert expired. Terminal; set by an external sweep.
    pub fn expire(&mut self) {
        self.status = AlertStatus::Expired;
        self.touch();
    }

    /// Names of the affected areas, in declaration order.
    pub fn area_names(&self) -> Vec<String> {
        self.affected_areas.iter().map(|a| a.name.clone()).collect()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.refresh_priority();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Alert {
        let now = Utc::now();
        Alert::new(
            "FLOOD-2026-0001",
            AlertKind::Flood,
            Severity::Severe,
            Urgency::Immediate,
            Some(Certainty::Likely),
            "River flooding",
            "The river has exceeded flood stage.",
            now,
            now + Duration::hours(6),
        )
    }

    #[test]
    fn test_priority_computed_at_construction() {
        let alert = sample();
        // 75 * 1.0 * 0.8 = 60
        assert_eq!(alert.priority_score, 60);
    }

    #[test]
    fn test_priority_tracks_mutations() {
        let mut alert = sample();
        alert.severity = Severity::Extreme;
        alert.certainty = Some(Certainty::Observed);
        alert.mark_updated();
        assert_eq!(alert.priority_score, 100);
        assert_eq!(alert.version, 2);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut alert = sample();
        assert_eq!(alert.status, AlertStatus::Draft);
        alert.activate();
        assert!(alert.status.allows_dispatch());
        alert.cancel();
        assert!(alert.status.is_terminal());
        assert!(!alert.status.allows_dispatch());
    }
}
