//! Email subject/text/HTML rendering.

use beacon_entity::alert::Alert;
use beacon_entity::user::User;

/// A rendered email with both plain-text and HTML bodies produced from
/// the same field set.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
    /// HTML body with severity color coding.
    pub html: String,
}

/// Render the email message for an alert, personalized for a recipient.
pub fn email_message(alert: &Alert, user: &User) -> EmailMessage {
    EmailMessage {
        subject: format!(
            "{} Alert: {}",
            alert.severity.as_str().to_uppercase(),
            alert.title
        ),
        text: text_body(alert, user),
        html: html_body(alert, user),
    }
}

/// Location line shared by both renderings: area names when present,
/// otherwise the point coordinates, otherwise nothing.
fn location_line(alert: &Alert) -> Option<String> {
    let areas = alert.area_names();
    if !areas.is_empty() {
        return Some(areas.join(", "));
    }
    alert
        .location
        .map(|p| format!("{:.4}, {:.4}", p.lat, p.lon))
}

fn text_body(alert: &Alert, user: &User) -> String {
    let mut body = format!("Hello {},\n\n{}\n", user.first_name, alert.description);

    if let Some(instructions) = &alert.instructions {
        body.push_str(&format!("\nInstructions:\n{instructions}\n"));
    }

    if let Some(location) = location_line(alert) {
        body.push_str(&format!("\nLocation: {location}"));
    }
    body.push_str(&format!(
        "\nEffective: {}\nExpires: {}\nSeverity: {}\nType: {}\n",
        alert.effective_at.format("%b %e, %Y %H:%M UTC"),
        alert.expires_at.format("%b %e, %Y %H:%M UTC"),
        alert.severity,
        alert.kind,
    ));

    if let Some(source) = &alert.source {
        body.push_str(&format!("\nIssued by: {}", source.organization));
        if let Some(contact) = &source.contact {
            body.push_str(&format!(" ({contact})"));
        }
        body.push('\n');
    }

    body
}

fn html_body(alert: &Alert, user: &User) -> String {
    let color = alert.severity.html_color();
    let severity = alert.severity.as_str().to_uppercase();

    let mut sections = String::new();
    if let Some(instructions) = &alert.instructions {
        sections.push_str(&format!(
            "<h3>Instructions</h3><p>{}</p>",
            escape(instructions)
        ));
    }

    let mut details = String::new();
    if let Some(location) = location_line(alert) {
        details.push_str(&format!("<li><b>Location:</b> {}</li>", escape(&location)));
    }
    details.push_str(&format!(
        "<li><b>Effective:</b> {}</li>\
         <li><b>Expires:</b> {}</li>\
         <li><b>Severity:</b> <span style=\"color:{color}\">{severity}</span></li>\
         <li><b>Type:</b> {}</li>",
        alert.effective_at.format("%b %e, %Y %H:%M UTC"),
        alert.expires_at.format("%b %e, %Y %H:%M UTC"),
        alert.kind,
    ));
    if let Some(source) = &alert.source {
        let contact = source
            .contact
            .as_deref()
            .map(|c| format!(" ({})", escape(c)))
            .unwrap_or_default();
        details.push_str(&format!(
            "<li><b>Issued by:</b> {}{contact}</li>",
            escape(&source.organization)
        ));
    }

    format!(
        "<div style=\"font-family:sans-serif;max-width:600px\">\
         <div style=\"background:{color};color:#fff;padding:12px 16px\">\
         <h2 style=\"margin:0\">{severity} Alert: {title}</h2></div>\
         <div style=\"padding:16px\">\
         <p>Hello {first_name},</p>\
         <p>{description}</p>\
         {sections}\
         <ul>{details}</ul>\
         </div></div>",
        title = escape(&alert.title),
        first_name = escape(&user.first_name),
        description = escape(&alert.description),
    )
}

/// Minimal HTML escaping for interpolated user and alert text.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
