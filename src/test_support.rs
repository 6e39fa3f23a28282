use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{EmailSender, MockEmailSender, SmtpConfig},
  state::SharedAppState,
};

pub fn test_config(cors_allow_origin: Option<&str>) -> AppConfig {
  AppConfig {
    smtp: Some(SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      username: "bot@example.com".to_string(),
      password: "secret".to_string(),
      from_email: "bot@example.com".to_string(),
    }),
    mail_to: "events@example.com".to_string(),
    cors_allow_origin: cors_allow_origin.map(str::to_string),
    ..AppConfig::default()
  }
}

pub fn app_with_sender(sender: MockEmailSender, cors_allow_origin: Option<&str>) -> Router {
  let sender: Arc<dyn EmailSender> = Arc::new(sender);
  create_app(SharedAppState::with_sender(test_config(cors_allow_origin), Some(sender)))
}

pub fn app_without_sender(cors_allow_origin: Option<&str>) -> Router {
  let config = AppConfig {
    smtp: None,
    ..test_config(cors_allow_origin)
  };
  create_app(SharedAppState::with_sender(config, None))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = Body::from(serde_json::to_vec(body).expect("serialize request body"));
  let (status, _, body) = send(app, Method::POST, uri, body).await;
  (status, body)
}
