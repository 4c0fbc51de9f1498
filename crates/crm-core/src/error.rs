//! Error types for `crm-core`.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  /// No record with this id exists in the collection.
  #[error("{noun} not found")]
  NotFound { noun: &'static str, id: String },

  /// A caller-supplied id collides with an existing record.
  #[error("{noun} with id {id:?} already exists")]
  IdTaken { noun: &'static str, id: String },

  #[error("unknown {kind}: {value:?}")]
  UnknownVariant { kind: &'static str, value: String },
}

impl Error {
  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
