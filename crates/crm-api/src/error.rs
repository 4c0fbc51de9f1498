//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body has the shape `{"message": "..."}`.

use std::any::Any;

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use crm_core::store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text returned for any fault whose detail must not reach the caller.
pub const INTERNAL_FAULT: &str = "Something went wrong!";

/// A `{"message": ...}` body, used for errors and acknowledgements alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub message: String,
}

impl Message {
  pub fn json(message: impl Into<String>) -> Json<Self> {
    Json(Self { message: message.into() })
  }
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("Route not found")]
  RouteNotFound,

  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Sort a store failure into a record-level error or an internal fault.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.as_core().cloned() {
      Some(core @ crm_core::Error::NotFound { .. }) => {
        Self::NotFound(core.to_string())
      }
      Some(core @ crm_core::Error::IdTaken { .. }) => {
        Self::Conflict(core.to_string())
      }
      _ => Self::Store(Box::new(e)),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    Self::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    Self::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        return (StatusCode::INTERNAL_SERVER_ERROR, Message::json(INTERNAL_FAULT))
          .into_response();
      }
    };
    (status, Message::json(self.to_string())).into_response()
  }
}

/// Fallback for requests no route matches.
pub async fn route_not_found() -> ApiError { ApiError::RouteNotFound }

/// Response for a handler that panicked; used with
/// [`tower_http::catch_panic::CatchPanicLayer::custom`].
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
  let detail = payload
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| payload.downcast_ref::<&str>().copied())
    .unwrap_or("unknown panic payload");
  tracing::error!(detail, "handler panicked");
  (StatusCode::INTERNAL_SERVER_ERROR, Message::json(INTERNAL_FAULT)).into_response()
}
