//! Priority scoring for alerts.
//!
//! The score is a deterministic function of the three alert axes and is
//! recomputed on every alert mutation. It is never settable independently.

use super::certainty::Certainty;
use super::severity::Severity;
use super::urgency::Urgency;

/// Compute the 0..=100 urgency score for an alert.
///
/// `base(severity) × multiplier(urgency) × multiplier(certainty)`,
/// rounded to the nearest integer. A missing certainty contributes a
/// neutral 0.5 multiplier.
pub fn priority_score(severity: Severity, urgency: Urgency, certainty: Option<Certainty>) -> u8 {
    let base = severity.base_score();
    let urgency_mul = urgency.multiplier();
    let certainty_mul = certainty.map_or(0.5, |c| c.multiplier());

    (base * urgency_mul * certainty_mul).round().clamp(0.0, 100.0) as u8
}
