use crate::email::sender::EmailSender;
use crate::email::types::{EmailError, EmailMessage, SmtpConfig};
use crate::impl_lettre_error_conversions;
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{Mailbox, MultiPart},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

impl_lettre_error_conversions!(EmailError, InvalidAddress, Build, Transport);

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  pub fn from_email(&self) -> &str {
    &self.smtp_config.from_email
  }

  /// Builds a multipart/alternative message and the `Message-ID` it carries.
  pub fn build_message(message: &EmailMessage) -> Result<(Message, String), EmailError> {
    let from: Mailbox = message.from.parse()?;
    let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

    let mut builder = Message::builder()
      .message_id(Some(message_id.clone()))
      .from(from)
      .to(message.to.parse()?)
      .subject(&message.subject);

    if let Some(reply_to) = &message.reply_to {
      builder = builder.reply_to(Mailbox::new(Some(reply_to.name.clone()), reply_to.email.parse()?));
    }

    let email = builder.multipart(MultiPart::alternative_plain_html(
      message.text_body.clone(),
      message.html_body.clone(),
    ))?;

    Ok((email, message_id))
  }
}

#[async_trait]
impl EmailSender for EmailService {
  async fn send(&self, message: EmailMessage) -> Result<Option<String>, EmailError> {
    let (email, message_id) = Self::build_message(&message)?;

    self.transporter.send(email).await?;

    Ok(Some(message_id))
  }
}
