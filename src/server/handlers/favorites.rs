//! Favorites request handlers
//!
//! Handles the /api/favorites routes by delegating to the FavoritesStore held
//! in AppContext.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::{Value, json};

use crate::domain::FavoriteWithTool;
use crate::error::{ApiError, Result};
use crate::server::context::AppContext;

const INVALID_TOOL_ID: &str = "toolId is required and must be a number";
const INVALID_JSON_BODY: &str = "Invalid JSON body";

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Decode a request body into JSON.
///
/// A body without a JSON content type, or an empty one, reads as `{}`; only a
/// non-empty JSON body that fails to parse is an error.
pub fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<Value> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    serde_json::from_slice(body).map_err(|e| {
        log::warn!("Rejected favorites body: {}", e);
        ApiError::InvalidArgument(INVALID_JSON_BODY.to_string())
    })
}

/// Extract `toolId` from a request body.
///
/// It must be a non-zero whole number. `1.0` counts as `1`; strings,
/// fractions, null and a missing key are rejected.
pub fn parse_tool_id(body: &Value) -> Result<i64> {
    body.get("toolId")
        .and_then(|v| {
            v.as_i64().or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
        })
        .filter(|id| *id != 0)
        .ok_or_else(|| ApiError::InvalidArgument(INVALID_TOOL_ID.to_string()))
}

/// Handle POST /api/favorites - add a tool to favorites
pub async fn add_favorite(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let body = body.map_err(|e| {
        log::warn!("Failed to read favorites body: {}", e);
        ApiError::InvalidArgument(INVALID_JSON_BODY.to_string())
    })?;
    let body = parse_body(&headers, &body)?;

    let tool_id = parse_tool_id(&body)?;

    let favorite = {
        let mut store = ctx.favorites.write().await;
        store.add(&ctx.catalog, tool_id)?
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Tool added to favorites successfully",
            "favorite": favorite,
        })),
    ))
}

/// Handle GET /api/favorites - list favorites joined with their tools
pub async fn list_favorites(State(ctx): State<AppContext>) -> Json<Vec<FavoriteWithTool>> {
    let store = ctx.favorites.read().await;
    Json(store.with_tools(&ctx.catalog))
}

/// Handle DELETE /api/favorites/{id} - remove a favorite
pub async fn remove_favorite(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    ctx.favorites.write().await.remove(&id)?;
    Ok(Json(json!({ "message": "Favorite removed successfully" })))
}
