use axum::{
  http::{header, HeaderValue},
  Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{domains::registration::rest::registration_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  let cors_allow_origin = state.config.cors_allow_origin.clone();

  let app = Router::new().merge(registration_routes()).with_state(state);

  match cors_allow_origin {
    Some(origin) => with_cors_headers(app, &origin),
    None => app,
  }
}

/// Stamps the allow-origin, allow-methods and allow-headers values on every
/// response, errors and preflight included.
fn with_cors_headers(app: Router, origin: &str) -> Router {
  let origin = match HeaderValue::from_str(origin) {
    Ok(origin) => origin,
    Err(e) => {
      tracing::warn!("Ignoring CORS_ALLOW_ORIGIN {:?}: {}", origin, e);
      return app;
    }
  };

  app
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      origin,
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_METHODS,
      HeaderValue::from_static("POST, OPTIONS"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static("Content-Type"),
    ))
}
