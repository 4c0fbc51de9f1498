//! [`MemoryStore`], the in-memory implementation of [`ResourceStore`].

use std::sync::Arc;

use crm_core::{Resource, store::ResourceStore};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An ordered collection of `R` records held in process memory.
///
/// Cloning is cheap; clones share the same collection. Every operation holds
/// the lock for its whole scan and mutation, so two writers never interleave.
#[derive(Debug)]
pub struct MemoryStore<R> {
  records: Arc<RwLock<Vec<R>>>,
}

impl<R> Clone for MemoryStore<R> {
  fn clone(&self) -> Self { Self { records: Arc::clone(&self.records) } }
}

impl<R> Default for MemoryStore<R> {
  fn default() -> Self { Self { records: Arc::new(RwLock::new(Vec::new())) } }
}

impl<R: Resource> MemoryStore<R> {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store holding `records` in the given order.
  pub fn seeded(records: Vec<R>) -> Self {
    Self { records: Arc::new(RwLock::new(records)) }
  }

  /// Number of records currently held.
  pub async fn len(&self) -> usize { self.records.read().await.len() }

  pub async fn is_empty(&self) -> bool { self.records.read().await.is_empty() }
}

fn position<R: Resource>(records: &[R], id: &str) -> Option<usize> {
  records.iter().position(|r| r.id() == id)
}

fn not_found<R: Resource>(id: &str) -> Error {
  crm_core::Error::NotFound { noun: R::NOUN, id: id.to_owned() }.into()
}

/// A fresh id that no record in `records` carries.
fn fresh_id<R: Resource>(records: &[R]) -> String {
  loop {
    let id = Uuid::new_v4().to_string();
    if position(records, &id).is_none() {
      return id;
    }
  }
}

// ─── ResourceStore impl ──────────────────────────────────────────────────────

impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
  type Error = Error;

  async fn list(&self) -> Result<Vec<R>> {
    Ok(self.records.read().await.clone())
  }

  async fn get(&self, id: &str) -> Result<Option<R>> {
    let records = self.records.read().await;
    Ok(records.iter().find(|r| r.id() == id).cloned())
  }

  async fn create(&self, draft: R::Draft) -> Result<R> {
    let mut records = self.records.write().await;

    let id = match R::requested_id(&draft) {
      Some(requested) if position(&records, requested).is_some() => {
        return Err(
          crm_core::Error::IdTaken { noun: R::NOUN, id: requested.to_owned() }
            .into(),
        );
      }
      Some(requested) => requested.to_owned(),
      None => fresh_id(&records),
    };

    let record = R::from_draft(id, draft);
    records.push(record.clone());
    tracing::debug!(noun = R::NOUN, id = record.id(), "record created");
    Ok(record)
  }

  async fn update(&self, id: &str, patch: R::Patch) -> Result<R> {
    let mut records = self.records.write().await;
    let record = records
      .iter_mut()
      .find(|r| r.id() == id)
      .ok_or_else(|| not_found::<R>(id))?;

    record.apply(patch);
    tracing::debug!(noun = R::NOUN, id, "record updated");
    Ok(record.clone())
  }

  async fn delete(&self, id: &str) -> Result<R> {
    let mut records = self.records.write().await;
    let index = position(&records, id).ok_or_else(|| not_found::<R>(id))?;

    let removed = records.remove(index);
    tracing::debug!(noun = R::NOUN, id, "record deleted");
    Ok(removed)
  }
}
