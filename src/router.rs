use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

use crate::handlers::{health, products};
use crate::state::AppState;

/// Builds the service router. CORS is wide open on every route so a
/// browser-hosted frontend on a different origin can call the API directly.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route_service("/", ServeFile::new("index.html"))
        .route("/products", get(products))
        .layer(cors)
        .with_state(state)
}
