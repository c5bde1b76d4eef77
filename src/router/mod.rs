//! Routing module for the storefront application

use crate::session::SharedState;
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(health))
        .merge(crate::catalog::routes())
        .merge(crate::reviews::routes())
        .merge(crate::cart::routes())
        .merge(crate::wishlist::routes())
        .merge(crate::admin::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": env!("CARGO_PKG_NAME") }))
}
