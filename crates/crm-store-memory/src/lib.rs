//! In-process backend for the CRM resource stores.
//!
//! Records live in an ordered `Vec` behind an async lock. Nothing is
//! persisted; all data is lost when the process exits.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
