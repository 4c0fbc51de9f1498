//! JSON REST API for the CRM demo.
//!
//! Exposes an axum [`Router`] backed by any pair of
//! [`ResourceStore`](crm_core::store::ResourceStore)s. No route requires
//! authentication; transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", crm_api::api_router(customers, visits))
//! ```

pub mod dashboard;
pub mod error;
pub mod health;
pub mod resources;
pub mod visits;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use crm_core::{customer::Customer, store::ResourceStore, visit::Visit};
use tower_http::catch_panic::CatchPanicLayer;

pub use error::{ApiError, Message, panic_response, route_not_found};

/// Build the API router over the two stores.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unmatched paths and unsupported methods answer
/// 404 `Route not found`; a panicking handler answers 500 `Something went wrong!`.
pub fn api_router<C, V>(customers: Arc<C>, visits: Arc<V>) -> Router<()>
where
  C: ResourceStore<Customer> + 'static,
  V: ResourceStore<Visit> + 'static,
{
  let customers = resources::routes::<Customer, C>().with_state(customers);
  let visits = resources::routes::<Visit, V>()
    .route("/visits/{id}/complete", post(visits::complete::<V>))
    .with_state(visits);

  Router::new()
    .merge(customers)
    .merge(visits)
    // Dashboard
    .route("/dashboard/stats", get(dashboard::stats))
    .route("/dashboard/visits", get(dashboard::visits))
    .route("/dashboard/activities", get(dashboard::activities))
    // Health
    .route("/health", get(health::handler))
    .method_not_allowed_fallback(route_not_found)
    .fallback(route_not_found)
    .layer(CatchPanicLayer::custom(panic_response))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use crm_core::demo;
  use crm_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn app() -> Router {
    api_router(
      Arc::new(MemoryStore::seeded(demo::customers())),
      Arc::new(MemoryStore::seeded(demo::visits())),
    )
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string())),
      None => builder.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  // ── Customers ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_customers_returns_seed() {
    let app = app();
    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[1]["owner"], "Mehmet Demir");
  }

  #[tokio::test]
  async fn customer_lifecycle_end_to_end() {
    let app = app();
    let (status, created) = send(
      &app,
      "POST",
      "/customers",
      Some(json!({
        "name": "Dr. X",
        "type": "doctor",
        "district": "A",
        "city": "B",
        "phone": "555",
        "email": "x@y.z"
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "active");
    let id = created["id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, ack) = send(&app, "DELETE", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "message": "Customer deleted successfully" }));

    let (status, body) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Customer not found" }));
  }

  #[tokio::test]
  async fn update_customer_merges_fields() {
    let app = app();
    let (status, body) =
      send(&app, "PUT", "/customers/3", Some(json!({ "status": "active" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["specialization"], "Nöroloji");
    assert_eq!(body["id"], "3");
  }

  #[tokio::test]
  async fn update_unknown_customer_is_404() {
    let app = app();
    let (status, body) =
      send(&app, "PUT", "/customers/404", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer not found");

    let (_, list) = send(&app, "GET", "/customers", None).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
  }

  #[tokio::test]
  async fn second_delete_is_404() {
    let app = app();
    let (first, _) = send(&app, "DELETE", "/customers/1", None).await;
    let (second, body) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer not found");
  }

  #[tokio::test]
  async fn create_with_taken_id_is_409() {
    let app = app();
    let (status, body) = send(
      &app,
      "POST",
      "/customers",
      Some(json!({ "id": "1", "type": "pharmacy" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already exists"));
  }

  #[tokio::test]
  async fn malformed_body_is_400_with_message() {
    let app = app();
    let (status, body) =
      send(&app, "POST", "/customers", Some(json!({ "type": "clinic" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
  }

  // ── Visits ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn put_visit_status_keeps_other_fields() {
    let app = app();
    let (_, before) = send(&app, "GET", "/visits/1", None).await;
    let (status, after) =
      send(&app, "PUT", "/visits/1", Some(json!({ "status": "completed" }))).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = before.clone();
    expected["status"] = json!("completed");
    assert_eq!(after, expected);
  }

  #[tokio::test]
  async fn create_visit_defaults_to_planned() {
    let app = app();
    let (status, body) = send(
      &app,
      "POST",
      "/visits",
      Some(json!({
        "customerName": "Sağlık Eczanesi",
        "customerType": "pharmacy",
        "location": "Mamak",
        "date": "2024-02-02",
        "time": "15:00"
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "planned");
  }

  #[tokio::test]
  async fn complete_action_marks_visit_completed() {
    let app = app();
    let (status, body) = send(&app, "POST", "/visits/3/complete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["location"], "Özel Hastane");

    let (status, body) = send(&app, "POST", "/visits/99/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Visit not found");
  }

  #[tokio::test]
  async fn delete_visit_acknowledges() {
    let app = app();
    let (status, body) = send(&app, "DELETE", "/visits/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Visit deleted successfully");
  }

  // ── Dashboard / health / fallback ───────────────────────────────────────────

  #[tokio::test]
  async fn dashboard_routes_return_fixed_payloads() {
    let app = app();
    let (status, stats) = send(&app, "GET", "/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalVisits"], 128);

    let (status, breakdown) = send(&app, "GET", "/dashboard/visits", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(breakdown["regions"].as_array().unwrap().len(), 4);

    let (status, activities) = send(&app, "GET", "/dashboard/activities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(activities.as_array().unwrap().len(), 5);
  }

  #[tokio::test]
  async fn dashboard_ignores_store_contents() {
    let app = app();
    send(&app, "DELETE", "/customers/1", None).await;
    let (_, stats) = send(&app, "GET", "/dashboard/stats", None).await;
    assert_eq!(stats["totalCustomers"], 45);
  }

  #[tokio::test]
  async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK", "message": "CRM Demo API is running" }));
  }

  #[tokio::test]
  async fn unknown_route_is_404_route_not_found() {
    let app = app();
    let (status, body) = send(&app, "GET", "/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Route not found" }));
  }

  #[tokio::test]
  async fn unsupported_method_is_404_route_not_found() {
    let app = app();
    for (method, uri) in [
      ("PATCH", "/customers/1"),
      ("DELETE", "/customers"),
      ("POST", "/health"),
      ("GET", "/visits/1/complete"),
    ] {
      let (status, body) = send(&app, method, uri, None).await;
      assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
      assert_eq!(body, json!({ "message": "Route not found" }), "{method} {uri}");
    }
    // The record is untouched.
    let (status, _) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn undecodable_id_is_400_with_message() {
    let app = app();
    for (method, uri) in [
      ("GET", "/customers/%FF"),
      ("PUT", "/visits/%FF"),
      ("DELETE", "/customers/%FF"),
      ("POST", "/visits/%FF/complete"),
    ] {
      let body = (method == "PUT").then(|| json!({ "status": "completed" }));
      let (status, body) = send(&app, method, uri, body).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
      assert!(body["message"].is_string(), "{method} {uri}: {body}");
    }
  }

  async fn boom() -> StatusCode { panic!("secret detail") }

  #[tokio::test]
  async fn panicking_handler_is_500_without_detail() {
    let app = Router::new()
      .route("/boom", get(boom))
      .layer(CatchPanicLayer::custom(panic_response));
    let (status, body) = send(&app, "GET", "/boom", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Something went wrong!" }));
  }
}
