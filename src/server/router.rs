//! Route table and cross-cutting layers
//!
//! Every route, the JSON 404 fallback, CORS, request logging and the
//! top-level panic handler are assembled here.

use std::any::Any;
use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::server::context::AppContext;
use crate::server::handlers;

/// Build the application router around a shared context
pub fn build_router(ctx: AppContext) -> Router {
    with_layers(api_routes()).with_state(ctx)
}

fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/api/tools", get(handlers::list_tools))
        .route(
            "/api/favorites",
            get(handlers::list_favorites).post(handlers::add_favorite),
        )
        .route("/api/favorites/{id}", delete(handlers::remove_favorite))
        .route("/health", get(handlers::health))
}

/// Fallbacks and cross-cutting layers shared by every route
fn with_layers(routes: Router<AppContext>) -> Router<AppContext> {
    routes
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(middleware::from_fn(log_requests))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

/// Any path or method without a route
async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Log method, path, status and latency for every request
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_server_error() {
        log::error!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        log::info!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
    }
    response
}

/// Turn a handler panic into a generic 500
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("Unhandled panic: {}", detail)).into_response()
}
