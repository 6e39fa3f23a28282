use std::sync::Arc;

use crate::config::AppConfig;
use crate::domains::registration::{
  model::{RegistrationResponse, RegistrationSubmission, NOT_CONFIGURED_MESSAGE},
  service::{RegistrationService, RegistrationServiceError, RegistrationServiceImpl},
};
use crate::email::EmailSender;
use crate::utils::init_email_service;

pub trait AppState: Clone + Send + Sync + 'static {
  fn is_email_configured(&self) -> bool;
  fn register(
    &self,
    submission: RegistrationSubmission,
  ) -> impl std::future::Future<Output = Result<RegistrationResponse, RegistrationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub config: Arc<AppConfig>,
  pub registration_service: Option<Arc<dyn RegistrationService>>,
}

impl SharedAppState {
  pub fn new(config: AppConfig) -> anyhow::Result<Self> {
    let email_sender = init_email_service(&config)?.map(|service| Arc::new(service) as Arc<dyn EmailSender>);
    Ok(Self::with_sender(config, email_sender))
  }

  /// Wires the registration flow over the given transport. Without a
  /// transport every registration is refused as unconfigured.
  pub fn with_sender(config: AppConfig, email_sender: Option<Arc<dyn EmailSender>>) -> Self {
    let from = config
      .smtp
      .as_ref()
      .map(|smtp| smtp.from_email.clone())
      .unwrap_or_default();

    let registration_service = email_sender.map(|sender| {
      Arc::new(RegistrationServiceImpl::new(sender, from, config.mail_to.clone())) as Arc<dyn RegistrationService>
    });

    Self {
      config: Arc::new(config),
      registration_service,
    }
  }
}

impl AppState for SharedAppState {
  fn is_email_configured(&self) -> bool {
    self.registration_service.is_some()
  }

  async fn register(&self, submission: RegistrationSubmission) -> Result<RegistrationResponse, RegistrationServiceError> {
    match &self.registration_service {
      Some(service) => service.register(submission).await,
      None => Err(RegistrationServiceError::InternalServerError(
        NOT_CONFIGURED_MESSAGE.to_string(),
      )),
    }
  }
}
