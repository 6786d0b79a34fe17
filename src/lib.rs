//! Toolshelf - an in-memory AI tool catalog with a favorites list
//!
//! Serves a fixed catalog of AI tools and lets clients keep a list of
//! favorites over a small JSON-over-HTTP API. All state lives in memory and
//! is reset when the process restarts.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod id;
pub mod server;
pub mod store;

pub use error::{ApiError, Result};
