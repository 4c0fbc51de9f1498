//! Visit-only actions on top of the generic CRUD routes.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use crm_core::{
  store::ResourceStore,
  visit::{Visit, VisitPatch, VisitStatus},
};

use crate::error::ApiError;

/// `POST /visits/{id}/complete`: marks the visit completed, whatever its
/// current status.
pub async fn complete<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<Visit>, ApiError>
where
  S: ResourceStore<Visit>,
{
  let Path(id) = path?;
  let visit = store
    .update(&id, VisitPatch::status(VisitStatus::Completed))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(visit))
}
