//! Async HTTP client wrapping the CRM JSON API.

use anyhow::{Context, Result, anyhow};
use crm_core::{
  customer::{Customer, CustomerPatch, NewCustomer},
  dashboard::{Activity, DashboardStats},
  visit::{NewVisit, Visit, VisitPatch},
};
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

/// Connection settings for the CRM API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url:   String,
  /// Where the server mounts the API; must match its `api_prefix`.
  pub api_prefix: String,
}

/// The `{"message": ...}` body the API returns on errors and deletes.
#[derive(Deserialize)]
struct MessageBody {
  message: String,
}

/// Async HTTP client for the CRM JSON REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    let base = self.config.base_url.trim_end_matches('/');
    match self.config.api_prefix.trim_matches('/') {
      "" => format!("{base}{path}"),
      prefix => format!("{base}/{prefix}{path}"),
    }
  }

  /// Decode a successful body, or turn the API's `message` into an error.
  async fn read<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
      let message = resp
        .json::<MessageBody>()
        .await
        .map(|b| b.message)
        .unwrap_or_else(|_| status.to_string());
      return Err(anyhow!("{what} → {status}: {message}"));
    }
    resp.json().await.with_context(|| format!("deserialising {what}"))
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    tracing::debug!(path, "GET");
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    Self::read(resp, &format!("GET {path}")).await
  }

  // ── Customers ─────────────────────────────────────────────────────────────

  /// `GET /api/customers`
  pub async fn list_customers(&self) -> Result<Vec<Customer>> {
    self.get("/customers").await
  }

  /// `GET /api/customers/{id}`
  pub async fn get_customer(&self, id: &str) -> Result<Customer> {
    self.get(&format!("/customers/{id}")).await
  }

  /// `POST /api/customers`
  pub async fn create_customer(&self, draft: &NewCustomer) -> Result<Customer> {
    let resp = self
      .client
      .post(self.url("/customers"))
      .json(draft)
      .send()
      .await
      .context("POST /customers failed")?;
    Self::read(resp, "POST /customers").await
  }

  /// `PUT /api/customers/{id}`
  pub async fn update_customer(
    &self,
    id: &str,
    patch: &CustomerPatch,
  ) -> Result<Customer> {
    let path = format!("/customers/{id}");
    let resp = self
      .client
      .put(self.url(&path))
      .json(patch)
      .send()
      .await
      .with_context(|| format!("PUT {path} failed"))?;
    Self::read(resp, &format!("PUT {path}")).await
  }

  /// `DELETE /api/customers/{id}`
  pub async fn delete_customer(&self, id: &str) -> Result<String> {
    self.delete(&format!("/customers/{id}")).await
  }

  /// Send a DELETE and return the acknowledgement message.
  async fn delete(&self, path: &str) -> Result<String> {
    tracing::debug!(path, "DELETE");
    let resp = self
      .client
      .delete(self.url(path))
      .send()
      .await
      .with_context(|| format!("DELETE {path} failed"))?;
    let ack: MessageBody = Self::read(resp, &format!("DELETE {path}")).await?;
    Ok(ack.message)
  }

  // ── Visits ────────────────────────────────────────────────────────────────

  /// `GET /api/visits`
  pub async fn list_visits(&self) -> Result<Vec<Visit>> { self.get("/visits").await }

  /// `GET /api/visits/{id}`
  pub async fn get_visit(&self, id: &str) -> Result<Visit> {
    self.get(&format!("/visits/{id}")).await
  }

  /// `POST /api/visits`
  pub async fn create_visit(&self, draft: &NewVisit) -> Result<Visit> {
    let resp = self
      .client
      .post(self.url("/visits"))
      .json(draft)
      .send()
      .await
      .context("POST /visits failed")?;
    Self::read(resp, "POST /visits").await
  }

  /// `PUT /api/visits/{id}`
  pub async fn update_visit(&self, id: &str, patch: &VisitPatch) -> Result<Visit> {
    let path = format!("/visits/{id}");
    let resp = self
      .client
      .put(self.url(&path))
      .json(patch)
      .send()
      .await
      .with_context(|| format!("PUT {path} failed"))?;
    Self::read(resp, &format!("PUT {path}")).await
  }

  /// `DELETE /api/visits/{id}`
  pub async fn delete_visit(&self, id: &str) -> Result<String> {
    self.delete(&format!("/visits/{id}")).await
  }

  /// `POST /api/visits/{id}/complete`
  pub async fn complete_visit(&self, id: &str) -> Result<Visit> {
    let path = format!("/visits/{id}/complete");
    let resp = self
      .client
      .post(self.url(&path))
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;
    Self::read(resp, &format!("POST {path}")).await
  }

  // ── Dashboard ─────────────────────────────────────────────────────────────

  /// `GET /api/dashboard/stats`
  pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
    self.get("/dashboard/stats").await
  }

  /// `GET /api/dashboard/activities`
  pub async fn recent_activities(&self) -> Result<Vec<Activity>> {
    self.get("/dashboard/activities").await
  }
}
