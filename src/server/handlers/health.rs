//! Health request handler

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::id::now_iso8601;
use crate::server::context::AppContext;

/// Body of GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub tools_count: usize,
    pub favorites_count: usize,
}

/// Handle GET /health - report status and collection sizes
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        timestamp: now_iso8601(),
        tools_count: ctx.tools_count(),
        favorites_count: ctx.favorites_count().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_counts() {
        let ctx = AppContext::new();
        ctx.favorites.write().await.add(&ctx.catalog, 1).unwrap();

        let Json(status) = health(State(ctx)).await;
        assert_eq!(status.status, "OK");
        assert_eq!(status.tools_count, 5);
        assert_eq!(status.favorites_count, 1);
    }

    #[test]
    fn test_health_json_shape() {
        let status = HealthStatus {
            status: "OK".to_string(),
            timestamp: "2026-10-19T12:00:00.000Z".to_string(),
            tools_count: 5,
            favorites_count: 0,
        };
        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value["toolsCount"], 5);
        assert_eq!(value["favoritesCount"], 0);
        assert_eq!(value["timestamp"], "2026-10-19T12:00:00.000Z");
    }
}
