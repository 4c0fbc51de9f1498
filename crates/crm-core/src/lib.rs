//! Core types and trait definitions for the pharma CRM demo.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Every other crate in the workspace builds on it.

// Native `async fn` in traits; the `Send` bounds are spelled out on the
// returned futures instead.
#![allow(async_fn_in_trait)]

pub mod customer;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod patch;
pub mod resource;
pub mod store;
pub mod user;
pub mod visit;

pub use error::{Error, Result};
pub use resource::Resource;
