use axum::{
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{
  model::{
    RegistrationResponse, RegistrationSubmission, DISPATCH_FAILURE_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
    NOT_CONFIGURED_MESSAGE,
  },
  service::RegistrationServiceError,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn registration_routes() -> Router<SharedAppState> {
  let endpoint = post(register_handler)
    .options(preflight_handler)
    .fallback(method_not_allowed_handler);

  Router::new()
    .route("/", endpoint.clone())
    .route("/api/webinar-register", endpoint)
}

pub async fn register_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  if !state.is_email_configured() {
    return Err(AppError::internal_server_error(NOT_CONFIGURED_MESSAGE));
  }

  let submission = RegistrationSubmission::from_body(&body).map_err(|e| {
    tracing::error!("Webinar registration error: unreadable body: {}", e);
    RegistrationServiceError::InternalServerError(DISPATCH_FAILURE_MESSAGE.to_string())
  })?;

  state.register(submission).await.map(JsonResponse).map_err(AppError::from)
}

async fn preflight_handler() -> StatusCode {
  StatusCode::OK
}

async fn method_not_allowed_handler() -> AppError {
  AppError::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE)
}
