//! Error type for `crm-store-memory`.

use crm_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] crm_core::Error),
}

impl StoreError for Error {
  fn as_core(&self) -> Option<&crm_core::Error> {
    match self {
      Self::Core(e) => Some(e),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
