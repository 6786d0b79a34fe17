//! Request handlers for the HTTP API
//!
//! Each submodule handles one group of routes:
//! - tools: catalog listing (GET /api/tools)
//! - favorites: add, list, remove (/api/favorites)
//! - health: liveness and counts (GET /health)

pub mod favorites;
pub mod health;
pub mod tools;

pub use favorites::*;
pub use health::*;
pub use tools::*;
