use std::fmt;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

/// Display name and address the recipient should answer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTo {
  pub name: String,
  pub email: String,
}

impl fmt::Display for ReplyTo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} <{}>", self.name, self.email)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub reply_to: Option<ReplyTo>,
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
}

#[derive(Debug)]
pub enum EmailError {
  InvalidAddress(String),
  Build(String),
  Transport(String),
}

impl std::error::Error for EmailError {}

impl fmt::Display for EmailError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EmailError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      EmailError::Build(msg) => write!(f, "Message build error: {}", msg),
      EmailError::Transport(msg) => write!(f, "Transport error: {}", msg),
    }
  }
}
