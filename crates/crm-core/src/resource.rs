//! The `Resource` trait: what a record type must provide to be stored and
//! served by the generic CRUD layer.

use serde::{Serialize, de::DeserializeOwned};

/// A record with a string identity, a create body and a partial-update body.
pub trait Resource:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// Body accepted by create. Fields left out fall back to record defaults.
  type Draft: Serialize + DeserializeOwned + Send + 'static;
  /// Body accepted by update. Every field is optional.
  type Patch: Serialize + DeserializeOwned + Send + 'static;

  /// Human-readable singular name, e.g. `"Customer"`.
  const NOUN: &'static str;
  /// Collection path segment, e.g. `"customers"`.
  const COLLECTION: &'static str;

  fn id(&self) -> &str;

  /// The id the caller asked for in a create body, if any.
  fn requested_id(draft: &Self::Draft) -> Option<&str>;

  /// Build a record from a create body and its final id, applying defaults.
  fn from_draft(id: String, draft: Self::Draft) -> Self;

  /// Shallow merge: every field present in `patch` overwrites, every absent
  /// field keeps its value. The id is never touched.
  fn apply(&mut self, patch: Self::Patch);
}
