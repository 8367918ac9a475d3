//! Core domain layer for the Global Career Link client.
//!
//! Holds the typed models, the per-resource state machines (reducers), the
//! composing [`Store`], and the shared [`ApiError`] type. This crate
//! performs no I/O; the `careerlink-client` crate binds these state
//! machines to a REST backend.

pub mod auth;
pub mod career;
pub mod error;
pub mod profile;
pub mod store;

// Re-export common types
pub use error::{ApiError, Result};
pub use store::Store;
