//! The `ResourceStore` trait.
//!
//! Implemented by storage backends (e.g. `crm-store-memory`). The HTTP layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{Error, Resource};

/// Lets generic callers tell record-level failures (missing id, taken id)
/// apart from faults in the backend itself.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn as_core(&self) -> Option<&Error>;
}

/// An ordered collection of `R` records.
///
/// `list` returns records in insertion order; deletions keep the relative
/// order of the remaining records.
pub trait ResourceStore<R: Resource>: Send + Sync {
  type Error: StoreError;

  /// The full collection, in order.
  fn list(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + 'a;

  /// Append a new record built from `draft` and return it.
  ///
  /// The store assigns a fresh unique id unless the draft requests one; a
  /// requested id that is already taken fails with [`Error::IdTaken`].
  fn create(
    &self,
    draft: R::Draft,
  ) -> impl Future<Output = Result<R, Self::Error>> + Send + '_;

  /// Merge `patch` over the record with this id and return the result.
  /// Fails with [`Error::NotFound`] and changes nothing if the id is absent.
  fn update<'a>(
    &'a self,
    id: &'a str,
    patch: R::Patch,
  ) -> impl Future<Output = Result<R, Self::Error>> + Send + 'a;

  /// Remove the record with this id and return it.
  /// Fails with [`Error::NotFound`] and changes nothing if the id is absent.
  fn delete<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<R, Self::Error>> + Send + 'a;
}
