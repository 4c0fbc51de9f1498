//! HTTP server assembly for the CRM demo.
//!
//! Owns the two in-memory stores and mounts the JSON API under a common
//! prefix, with CORS, request tracing and panic catching around it.

use std::sync::Arc;

use axum::Router;
use crm_core::{customer::Customer, demo, visit::Visit};
use crm_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::{
  catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `CRM_*`
/// environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Path prefix the API is mounted under, e.g. `/api`.
  pub api_prefix:     String,
  /// Start with the demo customers and visits instead of empty stores.
  pub seed_demo_data: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           "127.0.0.1".to_string(),
      port:           3000,
      api_prefix:     "/api".to_string(),
      seed_demo_data: true,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The prefix normalised to `/segment` form, or empty for the root.
  pub fn normalized_prefix(&self) -> String {
    let trimmed = self.api_prefix.trim_matches('/');
    if trimmed.is_empty() {
      String::new()
    } else {
      format!("/{trimmed}")
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// The stores shared by all handlers.
#[derive(Clone)]
pub struct AppState {
  pub customers: Arc<MemoryStore<Customer>>,
  pub visits:    Arc<MemoryStore<Visit>>,
}

impl AppState {
  /// Stores seeded with the demo data set.
  pub fn demo() -> Self {
    Self {
      customers: Arc::new(MemoryStore::seeded(demo::customers())),
      visits:    Arc::new(MemoryStore::seeded(demo::visits())),
    }
  }

  /// Empty stores.
  pub fn empty() -> Self {
    Self {
      customers: Arc::new(MemoryStore::new()),
      visits:    Arc::new(MemoryStore::new()),
    }
  }

  pub fn from_config(config: &ServerConfig) -> Self {
    if config.seed_demo_data { Self::demo() } else { Self::empty() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`].
pub fn router(state: AppState, config: &ServerConfig) -> Router {
  let api = crm_api::api_router(state.customers, state.visits);
  let prefix = config.normalized_prefix();

  let app = if prefix.is_empty() {
    Router::new().merge(api)
  } else {
    Router::new().nest(&prefix, api)
  };

  app
    .method_not_allowed_fallback(crm_api::route_not_found)
    .fallback(crm_api::route_not_found)
    .layer(CatchPanicLayer::custom(crm_api::panic_response))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn oneshot(app: Router, method: &str, uri: &str) -> Response {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::ORIGIN, "http://localhost:5173")
      .body(Body::empty())
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn health_is_served_under_prefix() {
    let config = ServerConfig::default();
    let resp = oneshot(router(AppState::demo(), &config), "GET", "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "OK");
  }

  #[tokio::test]
  async fn unknown_route_outside_prefix_is_json_404() {
    let config = ServerConfig::default();
    let resp = oneshot(router(AppState::demo(), &config), "GET", "/nonexistent").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "Route not found" }));
  }

  #[tokio::test]
  async fn unknown_route_inside_prefix_is_json_404() {
    let config = ServerConfig::default();
    let resp = oneshot(router(AppState::demo(), &config), "GET", "/api/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "Route not found" }));
  }

  #[tokio::test]
  async fn unsupported_method_under_prefix_is_json_404() {
    let config = ServerConfig::default();
    let resp =
      oneshot(router(AppState::demo(), &config), "PATCH", "/api/customers/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "Route not found" }));
  }

  #[tokio::test]
  async fn cors_allows_any_origin() {
    let config = ServerConfig::default();
    let resp = oneshot(router(AppState::demo(), &config), "GET", "/api/customers").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[tokio::test]
  async fn empty_state_lists_nothing() {
    let config = ServerConfig { seed_demo_data: false, ..ServerConfig::default() };
    let state = AppState::from_config(&config);
    let resp = oneshot(router(state, &config), "GET", "/api/visits").await;
    assert_eq!(json_body(resp).await, json!([]));
  }

  #[tokio::test]
  async fn root_prefix_mounts_at_top_level() {
    let config = ServerConfig { api_prefix: "/".to_string(), ..ServerConfig::default() };
    let resp = oneshot(router(AppState::demo(), &config), "GET", "/customers/2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Merkez Eczanesi");
  }

  #[test]
  fn config_defaults_apply_to_missing_keys() {
    let settings = config::Config::builder()
      .add_source(config::File::from_str(
        "port = 8080\napi_prefix = \"v1/\"",
        config::FileFormat::Toml,
      ))
      .build()
      .unwrap();
    let cfg: ServerConfig = settings.try_deserialize().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.host, "127.0.0.1");
    assert!(cfg.seed_demo_data);
    assert_eq!(cfg.normalized_prefix(), "/v1");
    assert_eq!(cfg.address(), "127.0.0.1:8080");
  }
}
