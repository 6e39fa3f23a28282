use crate::config::AppConfig;
use crate::email::EmailService;

pub mod error;

/// Escapes the five characters significant in HTML text and attributes.
pub fn escape_html(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#039;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Returns `None` when no SMTP credentials are configured.
pub fn init_email_service(config: &AppConfig) -> anyhow::Result<Option<EmailService>> {
  match &config.smtp {
    Some(smtp_config) => Ok(Some(EmailService::new(smtp_config.clone())?)),
    None => {
      tracing::warn!("EMAIL_USER/EMAIL_PASS not set; registrations will be rejected");
      Ok(None)
    }
  }
}
