//! Notification email built from an accepted lead.

use crate::domain::model::{Lead, OutboundEmail};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

const STYLE: &str = r#"body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
      .container { max-width: 600px; margin: 0 auto; padding: 20px; }
      .header { background: linear-gradient(135deg, #1e40af, #1e3a8a); color: white; padding: 30px; text-align: center; border-radius: 8px 8px 0 0; }
      .content { background: #f8fafc; padding: 30px; border: 1px solid #e2e8f0; }
      .field { margin-bottom: 20px; }
      .label { font-weight: bold; color: #1e40af; margin-bottom: 5px; }
      .value { background: white; padding: 10px; border-radius: 4px; border: 1px solid #e2e8f0; }
      .footer { background: #0f172a; color: #94a3b8; padding: 20px; text-align: center; font-size: 12px; border-radius: 0 0 8px 8px; }
      .urgent { background: #fef3c7; border-left: 4px solid #f59e0b; padding: 15px; margin: 20px 0; border-radius: 4px; }"#;

pub fn subject_line(lead: &Lead) -> String {
    format!(
        "New Lead: {} {} - {}",
        lead.first_name, lead.last_name, lead.service
    )
}

/// `10/18/2026, 2:05:09 PM` in the given zone.
pub fn display_timestamp(at: DateTime<Utc>, zone: Tz) -> String {
    at.with_timezone(&zone)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Escapes the characters that could open markup or break out of an attribute.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_field(html: &mut String, label: &str, value_html: &str) {
    let _ = write!(
        html,
        r#"
        <div class="field">
          <div class="label">{label}:</div>
          <div class="value">{value_html}</div>
        </div>"#
    );
}

pub fn render_html(lead: &Lead, submitted_at: &str) -> String {
    let first_name = escape_html(&lead.first_name);
    let last_name = escape_html(&lead.last_name);
    let email = escape_html(&lead.email);
    let phone = escape_html(&lead.phone);

    let mut html = String::with_capacity(4096);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      {STYLE}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>🔧 New Service Request</h1>
        <p>West Orange Plumbing Services</p>
      </div>
      <div class="content">
        <div class="urgent">
          <strong>⚡ New lead received!</strong> Contact this customer as soon as possible.
        </div>"#
    );

    push_field(&mut html, "Customer Name", &format!("{first_name} {last_name}"));
    push_field(
        &mut html,
        "Email",
        &format!(r#"<a href="mailto:{email}">{email}</a>"#),
    );
    push_field(
        &mut html,
        "Phone",
        &format!(r#"<a href="tel:{phone}">{phone}</a>"#),
    );
    push_field(&mut html, "Service Requested", &escape_html(&lead.service));
    if let Some(message) = &lead.message {
        push_field(&mut html, "Message", &escape_html(message));
    }
    push_field(&mut html, "Submitted", &escape_html(submitted_at));

    html.push_str(
        r#"
      </div>
      <div class="footer">
        <p>This is an automated notification from West Orange Plumbing Services</p>
        <p>Lead submitted via westorangeplumbing.com</p>
      </div>
    </div>
  </body>
</html>
"#,
    );
    html
}

pub fn build_notification(
    lead: &Lead,
    from: &str,
    to: &str,
    submitted_at: DateTime<Utc>,
    zone: Tz,
) -> OutboundEmail {
    OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        subject: subject_line(lead),
        html: render_html(lead, &display_timestamp(submitted_at, zone)),
    }
}
