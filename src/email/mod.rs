//! Email sending functionality module
//!
//! The `EmailSender` trait is the seam between the registration flow and the
//! mail provider. `EmailService` implements it over SMTP using lettre.

mod sender;
mod service;
mod types;

#[cfg(test)]
pub use sender::MockEmailSender;
pub use sender::EmailSender;
pub use service::EmailService;
pub use types::{EmailError, EmailMessage, ReplyTo, SmtpConfig};
