use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use super::{
  model::{present, RegistrationResponse, RegistrationSubmission, DISPATCH_FAILURE_MESSAGE, REQUIRED_FIELDS_MESSAGE},
  template::{format_ist, render},
};
use crate::email::{EmailMessage, EmailSender, ReplyTo};

#[derive(Debug)]
pub enum RegistrationServiceError {
  ValidationError(String),
  InternalServerError(String),
}

impl Error for RegistrationServiceError {}

impl std::fmt::Display for RegistrationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RegistrationServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      RegistrationServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
  async fn register(&self, submission: RegistrationSubmission) -> Result<RegistrationResponse, RegistrationServiceError>;
}

pub struct RegistrationServiceImpl<S: ?Sized> {
  from: String,
  to: String,
  email_sender: Arc<S>,
}

impl<S> RegistrationServiceImpl<S>
where
  S: EmailSender + ?Sized,
{
  pub fn new(email_sender: Arc<S>, from: impl Into<String>, to: impl Into<String>) -> Self {
    Self {
      from: from.into(),
      to: to.into(),
      email_sender,
    }
  }

  pub fn compose(&self, submission: &RegistrationSubmission, submitted_at: &str) -> EmailMessage {
    let rendered = render(submission, submitted_at);

    EmailMessage {
      from: self.from.clone(),
      to: self.to.clone(),
      reply_to: present(Some(submission.email.as_str())).map(|email| ReplyTo {
        name: submission.name.clone(),
        email: email.to_string(),
      }),
      subject: rendered.subject,
      html_body: rendered.html,
      text_body: rendered.text,
    }
  }
}

#[async_trait]
impl<S> RegistrationService for RegistrationServiceImpl<S>
where
  S: EmailSender + ?Sized,
{
  async fn register(&self, submission: RegistrationSubmission) -> Result<RegistrationResponse, RegistrationServiceError> {
    submission
      .validate()
      .map_err(|_| RegistrationServiceError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string()))?;

    let message = self.compose(&submission, &format_ist(Utc::now()));

    match self.email_sender.send(message).await {
      Ok(message_id) => {
        tracing::info!(message_id = ?message_id, "Webinar registration email sent");
        Ok(RegistrationResponse::success(message_id))
      }
      Err(e) => {
        tracing::error!("Webinar registration error: {}", e);
        Err(RegistrationServiceError::InternalServerError(
          DISPATCH_FAILURE_MESSAGE.to_string(),
        ))
      }
    }
  }
}
