#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use crate::domains::registration::{
    model::{RegistrationSubmission, DISPATCH_FAILURE_MESSAGE, REQUIRED_FIELDS_MESSAGE, SUCCESS_MESSAGE},
    service::{RegistrationService, RegistrationServiceError, RegistrationServiceImpl},
    template::NOT_PROVIDED,
  };
  use crate::email::{EmailError, MockEmailSender, ReplyTo};

  fn jane() -> RegistrationSubmission {
    RegistrationSubmission {
      name: "Jane Doe".to_string(),
      email: "jane@x.com".to_string(),
      contact: "555-1234".to_string(),
      ..Default::default()
    }
  }

  fn service(mock_sender: MockEmailSender) -> RegistrationServiceImpl<MockEmailSender> {
    RegistrationServiceImpl::new(Arc::new(mock_sender), "bot@example.com", "events@example.com")
  }

  #[tokio::test]
  async fn test_register_success() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .withf(|message| {
        message.from == "bot@example.com"
          && message.to == "events@example.com"
          && message.reply_to
            == Some(ReplyTo {
              name: "Jane Doe".to_string(),
              email: "jane@x.com".to_string(),
            })
          && message.subject == "New Webinar Registration: Untitled Webinar — Jane Doe"
          && message.html_body.matches(NOT_PROVIDED).count() == 7
          && message.text_body.contains("Name: Jane Doe")
      })
      .times(1)
      .returning(|_| Ok(Some("<abc@example.com>".to_string())));

    let result = service(mock_sender).register(jane()).await;
    assert!(result.is_ok());
    let response = result.unwrap();
    assert!(response.success);
    assert_eq!(response.id.as_deref(), Some("<abc@example.com>"));
    assert_eq!(response.message, SUCCESS_MESSAGE);
  }

  #[tokio::test]
  async fn test_register_without_message_id() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender.expect_send().times(1).returning(|_| Ok(None));

    let response = service(mock_sender).register(jane()).await.unwrap();
    assert!(response.success);
    assert_eq!(response.id, None);
  }

  #[tokio::test]
  async fn test_register_with_title_and_optional_fields() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .withf(|message| {
        message.subject == "New Webinar Registration: Chromatography 101 — Jane Doe"
          && message.html_body.contains("Acme &amp; Sons")
          && message.text_body.contains("Company Name: Acme & Sons")
          && message.html_body.matches(NOT_PROVIDED).count() == 5
      })
      .times(1)
      .returning(|_| Ok(Some("<id@example.com>".to_string())));

    let mut submission = jane();
    submission.webinar_title = Some("Chromatography 101".to_string());
    submission.company_name = Some("Acme & Sons".to_string());

    assert!(service(mock_sender).register(submission).await.is_ok());
  }

  #[tokio::test]
  async fn test_register_missing_required_fields() {
    for submission in [
      RegistrationSubmission {
        name: String::new(),
        ..jane()
      },
      RegistrationSubmission {
        email: "   ".to_string(),
        ..jane()
      },
      RegistrationSubmission {
        contact: "\t".to_string(),
        ..jane()
      },
      RegistrationSubmission::default(),
    ] {
      let mut mock_sender = MockEmailSender::new();
      mock_sender.expect_send().times(0);

      let result = service(mock_sender).register(submission).await;
      match result {
        Err(RegistrationServiceError::ValidationError(msg)) => assert_eq!(msg, REQUIRED_FIELDS_MESSAGE),
        other => panic!("Expected ValidationError, got {:?}", other),
      }
    }
  }

  #[tokio::test]
  async fn test_register_dispatch_failure() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .times(1)
      .returning(|_| Err(EmailError::Transport("connection refused".to_string())));

    let result = service(mock_sender).register(jane()).await;
    match result {
      Err(RegistrationServiceError::InternalServerError(msg)) => {
        assert_eq!(msg, DISPATCH_FAILURE_MESSAGE);
        assert!(!msg.contains("connection refused"));
      }
      other => panic!("Expected InternalServerError, got {:?}", other),
    }
  }

  #[test]
  fn test_compose_escapes_html_but_not_text() {
    let service = service(MockEmailSender::new());
    let mut submission = jane();
    submission.city = Some("<script>x</script>".to_string());

    let message = service.compose(&submission, "18/10/2026, 3:05:09 pm");
    assert!(!message.html_body.contains("<script>"));
    assert!(message.text_body.contains("City: <script>x</script>"));
    assert!(message.text_body.contains("Submitted at (IST): 18/10/2026, 3:05:09 pm"));
  }
}
