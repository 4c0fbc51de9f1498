//! Generic CRUD handlers, instantiated once per [`Resource`].
//!
//! | Method   | Path                  | Notes |
//! |----------|-----------------------|-------|
//! | `GET`    | `/<collection>`       | Full collection, in order |
//! | `POST`   | `/<collection>`       | Body: draft; returns 201 + created record |
//! | `GET`    | `/<collection>/{id}`  | 404 if not found |
//! | `PUT`    | `/<collection>/{id}`  | Body: patch; returns merged record |
//! | `DELETE` | `/<collection>/{id}`  | Returns `{"message": "<Noun> deleted successfully"}` |

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use crm_core::{Resource, store::ResourceStore};

use crate::error::{ApiError, Message};

/// The five routes for `R`, awaiting their store as router state.
pub fn routes<R, S>() -> Router<Arc<S>>
where
  R: Resource,
  S: ResourceStore<R> + 'static,
{
  let collection = format!("/{}", R::COLLECTION);
  let member = format!("/{}/{{id}}", R::COLLECTION);
  Router::new()
    .route(&collection, get(list::<R, S>).post(create::<R, S>))
    .route(
      &member,
      get(get_one::<R, S>)
        .put(update::<R, S>)
        .delete(delete_one::<R, S>),
    )
}

// ─── List ─────────────────────────────────────────────────────────────────────

pub async fn list<R, S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<R>>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let records = store.list().await.map_err(ApiError::from_store)?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

pub async fn get_one<R, S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<R>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let Path(id) = path?;
  let record = store
    .get(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("{} not found", R::NOUN)))?;
  Ok(Json(record))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Returns 201 + the stored record.
pub async fn create<R, S>(
  State(store): State<Arc<S>>,
  body: Result<Json<R::Draft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let Json(draft) = body?;
  let record = store.create(draft).await.map_err(ApiError::from_store)?;
  tracing::info!(noun = R::NOUN, id = record.id(), "created");
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

pub async fn update<R, S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
  body: Result<Json<R::Patch>, JsonRejection>,
) -> Result<Json<R>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let Path(id) = path?;
  let Json(patch) = body?;
  let record = store.update(&id, patch).await.map_err(ApiError::from_store)?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

pub async fn delete_one<R, S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let Path(id) = path?;
  store.delete(&id).await.map_err(ApiError::from_store)?;
  tracing::info!(noun = R::NOUN, id = %id, "deleted");
  Ok(Message::json(format!("{} deleted successfully", R::NOUN)))
}
