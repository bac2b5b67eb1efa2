//! SMS body rendering.

use beacon_entity::alert::{Alert, Urgency};

/// Maximum body length for a single SMS segment.
const MAX_SMS_LEN: usize = 160;

/// Render the plain-text SMS body for an alert.
///
/// Layout: `[URGENT ]SEVERITY: title[ - areas] | description[ |
/// instructions] | Effective: time`. Bodies longer than 160 characters
/// are hard-truncated to 157 characters plus `"..."` so the message
/// always fits one segment.
pub fn sms_body(alert: &Alert) -> String {
    let urgent = if alert.urgency == Urgency::Immediate {
        "URGENT "
    } else {
        ""
    };

    let mut headline = format!(
        "{urgent}{}: {}",
        alert.severity.as_str().to_uppercase(),
        alert.title
    );
    let areas = alert.area_names();
    if !areas.is_empty() {
        headline.push_str(" - ");
        headline.push_str(&areas.join(", "));
    }

    let mut parts = vec![headline, alert.description.clone()];
    if let Some(instructions) = &alert.instructions {
        parts.push(instructions.clone());
    }
    parts.push(format!(
        "Effective: {}",
        alert.effective_at.format("%b %e, %H:%M UTC")
    ));

    truncate_to_segment(parts.join(" | "))
}

/// Hard-truncate to one SMS segment on char boundaries.
fn truncate_to_segment(body: String) -> String {
    if body.chars().count() <= MAX_SMS_LEN {
        return body;
    }
    let mut truncated: String = body.chars().take(MAX_SMS_LEN - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_entity::alert::{AffectedArea, AlertKind, Certainty, Severity, Urgency};
    use chrono::{Duration, TimeZone, Utc};

    fn alert(urgency: Urgency, description: &str) -> Alert {
        let effective = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let mut alert = Alert::new(
            "STORM-2026-0003",
            AlertKind::Storm,
            Severity::Severe,
            urgency,
            Some(Certainty::Likely),
            "Coastal storm",
            description,
            effective,
            effective + Duration::hours(12),
        );
        alert.affected_areas = vec![
            AffectedArea {
                name: "Bayview".to_string(),
                point: None,
                population: None,
            },
            AffectedArea {
                name: "Harbor District".to_string(),
                point: None,
                population: None,
            },
        ];
        alert
    }

    #[test]
    fn test_urgent_flag_only_for_immediate() {
        let body = sms_body(&alert(Urgency::Immediate, "High winds."));
        assert!(body.starts_with("URGENT SEVERE: Coastal storm"));

        let body = sms_body(&alert(Urgency::Expected, "High winds."));
        assert!(body.starts_with("SEVERE: Coastal storm"));
    }

    #[test]
    fn test_areas_joined_with_comma() {
        let body = sms_body(&alert(Urgency::Expected, "High winds."));
        assert!(body.contains("Bayview, Harbor District"));
    }

    #[test]
    fn test_areas_omitted_when_empty() {
        let mut a = alert(Urgency::Expected, "High winds.");
        a.affected_areas.clear();
        let body = sms_body(&a);
        assert!(body.contains("SEVERE: Coastal storm | High winds."));
    }

    #[test]
    fn test_instructions_and_effective_time_included() {
        let mut a = alert(Urgency::Expected, "High winds.");
        a.instructions = Some("Avoid the shore.".to_string());
        let body = sms_body(&a);
        assert!(body.contains("| Avoid the shore. |"));
        assert!(body.contains("Effective: Mar 14, 09:30 UTC"));
    }

    #[test]
    fn test_truncation_to_exactly_160() {
        let long = "x".repeat(400);
        let body = sms_body(&alert(Urgency::Immediate, &long));
        assert_eq!(body.chars().count(), 160);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_short_body_untouched() {
        let body = sms_body(&alert(Urgency::Immediate, "Wind."));
        assert!(body.chars().count() <= 160);
        assert!(!body.ends_with("..."));
    }
}
