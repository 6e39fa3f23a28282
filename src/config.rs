use std::env;

use crate::email::SmtpConfig;

pub const DEFAULT_MAIL_TO: &str = "info@inkarp.co.in";
pub const DEFAULT_PORT: u16 = 8000;

/// Process configuration, read once at start.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// `None` when `EMAIL_USER` or `EMAIL_PASS` is missing.
  pub smtp: Option<SmtpConfig>,
  pub mail_to: String,
  pub cors_allow_origin: Option<String>,
  pub port: u16,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      smtp: None,
      mail_to: DEFAULT_MAIL_TO.to_string(),
      cors_allow_origin: None,
      port: DEFAULT_PORT,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from a key lookup. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let smtp = match (get("EMAIL_USER"), get("EMAIL_PASS")) {
      (Some(username), Some(password)) => Some(SmtpConfig {
        host: get("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
        port: get("SMTP_PORT").and_then(|port| port.parse().ok()).unwrap_or(587),
        from_email: username.clone(),
        username,
        password,
      }),
      _ => None,
    };

    AppConfig {
      smtp,
      mail_to: get("MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_string()),
      cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
      port: get("PORT").and_then(|port| port.parse().ok()).unwrap_or(DEFAULT_PORT),
    }
  }
}
