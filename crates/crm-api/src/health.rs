//! Handler for `GET /health`.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
  pub status:  String,
  pub message: String,
}

pub async fn handler() -> Json<Health> {
  Json(Health {
    status:  "OK".to_owned(),
    message: "CRM Demo API is running".to_owned(),
  })
}
