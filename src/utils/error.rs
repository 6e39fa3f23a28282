use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn method_not_allowed(message: impl Into<String>) -> Self {
    Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "success": false,
      "message": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::registration::service::RegistrationServiceError> for AppError {
  fn from(error: crate::domains::registration::service::RegistrationServiceError) -> Self {
    use crate::domains::registration::service::RegistrationServiceError;
    match error {
      RegistrationServiceError::ValidationError(msg) => AppError::bad_request(msg),
      RegistrationServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}
