use chrono::{DateTime, Duration, Utc};

use super::model::{present, RegistrationSubmission};
use crate::utils::escape_html;

pub const NOT_PROVIDED: &str = "Not provided";
pub const UNTITLED_WEBINAR: &str = "Untitled Webinar";

/// Indian Standard Time, UTC+05:30, no daylight saving.
const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;

const CELL_STYLE: &str = "border-bottom:1px solid #eee;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
  WebinarTitle,
  Name,
  Email,
  Contact,
  CompanyName,
  Department,
  Designation,
  City,
  State,
  Country,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
  pub label: &'static str,
  pub key: FieldKey,
}

/// Display order shared by the HTML and plain-text bodies.
pub const FIELDS: [FieldDescriptor; 10] = [
  FieldDescriptor { label: "Webinar Title", key: FieldKey::WebinarTitle },
  FieldDescriptor { label: "Name", key: FieldKey::Name },
  FieldDescriptor { label: "Email", key: FieldKey::Email },
  FieldDescriptor { label: "Contact", key: FieldKey::Contact },
  FieldDescriptor { label: "Company Name", key: FieldKey::CompanyName },
  FieldDescriptor { label: "Department", key: FieldKey::Department },
  FieldDescriptor { label: "Designation", key: FieldKey::Designation },
  FieldDescriptor { label: "City", key: FieldKey::City },
  FieldDescriptor { label: "State", key: FieldKey::State },
  FieldDescriptor { label: "Country", key: FieldKey::Country },
];

impl RegistrationSubmission {
  pub fn field(&self, key: FieldKey) -> Option<&str> {
    match key {
      FieldKey::WebinarTitle => self.webinar_title.as_deref(),
      FieldKey::Name => Some(self.name.as_str()),
      FieldKey::Email => Some(self.email.as_str()),
      FieldKey::Contact => Some(self.contact.as_str()),
      FieldKey::CompanyName => self.company_name.as_deref(),
      FieldKey::Department => self.department.as_deref(),
      FieldKey::Designation => self.designation.as_deref(),
      FieldKey::City => self.city.as_deref(),
      FieldKey::State => self.state.as_deref(),
      FieldKey::Country => self.country.as_deref(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
  pub subject: String,
  pub html: String,
  pub text: String,
}

/// Formats an instant the way the `en-IN` locale prints IST wall time,
/// e.g. `18/10/2026, 3:05:09 pm`.
pub fn format_ist(at: DateTime<Utc>) -> String {
  let local = at.naive_utc() + Duration::minutes(IST_OFFSET_MINUTES);
  local.format("%-d/%-m/%Y, %-I:%M:%S %P").to_string()
}

pub fn render_subject(submission: &RegistrationSubmission) -> String {
  let title = submission
    .webinar_title
    .as_deref()
    .filter(|title| !title.is_empty())
    .unwrap_or(UNTITLED_WEBINAR);
  format!("New Webinar Registration: {} — {}", title, submission.name)
}

pub fn render(submission: &RegistrationSubmission, submitted_at: &str) -> RenderedEmail {
  RenderedEmail {
    subject: render_subject(submission),
    html: render_html(submission, submitted_at),
    text: render_text(submission, submitted_at),
  }
}

fn html_cell(submission: &RegistrationSubmission, key: FieldKey) -> String {
  match (key, present(submission.field(key))) {
    (FieldKey::Email, _) => {
      let email = escape_html(&submission.email);
      format!("<a href=\"mailto:{}\">{}</a>", email, email)
    }
    (_, Some(value)) => escape_html(value),
    (_, None) => NOT_PROVIDED.to_string(),
  }
}

pub fn render_html(submission: &RegistrationSubmission, submitted_at: &str) -> String {
  let rows: String = FIELDS
    .iter()
    .map(|field| {
      format!(
        "          <tr><td style=\"{style}\"><strong>{label}</strong></td><td style=\"{style}\">{value}</td></tr>\n",
        style = CELL_STYLE,
        label = field.label,
        value = html_cell(submission, field.key),
      )
    })
    .collect();

  format!(
    r#"
      <h2 style="margin:0 0 8px 0;">New Webinar Registration</h2>
      <p style="margin:0 0 8px 0;color:#555;">Submitted at (IST): {submitted_at}</p>
      <table cellpadding="8" cellspacing="0" border="0" style="border-collapse:collapse;background:#fff;border:1px solid #eee;">
        <tbody>
{rows}        </tbody>
      </table>
    "#,
    submitted_at = escape_html(submitted_at),
    rows = rows,
  )
}

pub fn render_text(submission: &RegistrationSubmission, submitted_at: &str) -> String {
  let mut text = format!("New Webinar Registration\nSubmitted at (IST): {}", submitted_at);
  for field in FIELDS.iter() {
    text.push_str(&format!("\n{}: {}", field.label, submission.field(field.key).unwrap_or("")));
  }
  text
}
