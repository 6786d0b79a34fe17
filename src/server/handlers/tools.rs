//! Catalog request handlers
//!
//! Handles GET /api/tools.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::domain::Tool;
use crate::server::context::AppContext;

/// Pick the category filter from raw query pairs.
///
/// The first `category` value wins when the key is repeated.
pub fn category_filter(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str())
}

/// Handle GET /api/tools - list tools, optionally filtered by category
///
/// Never fails: an unreadable query string lists the whole catalog.
pub async fn list_tools(
    State(ctx): State<AppContext>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<Tool>> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            log::warn!("Ignoring unreadable tools query: {}", e);
            Vec::new()
        }
    };
    let category = category_filter(&pairs);

    let tools: Vec<Tool> = ctx.catalog.list(category).into_iter().cloned().collect();

    log::debug!("Listing {} tools (category: {:?})", tools.len(), category);
    Json(tools)
}
