use async_trait::async_trait;

use super::types::{EmailError, EmailMessage};

/// Outbound mail transport.
///
/// Sends one message and returns the identifier the message was sent with,
/// when the backend assigns one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
  async fn send(&self, message: EmailMessage) -> Result<Option<String>, EmailError>;
}
