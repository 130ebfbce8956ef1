use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub csv: String,
}

/// Health check endpoint. Always 200; reports the resolved catalog path so a
/// misconfigured deployment is visible at a glance.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let csv = state
        .catalog
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "NOT FOUND".to_string());

    Json(HealthResponse { ok: true, csv })
}

/// Returns the full catalog as a JSON array, re-reading the file per request.
/// Any loader failure aborts the request with a plain-text diagnostic; the
/// cause is exposed deliberately to aid debugging from the browser console.
pub async fn products(State(state): State<AppState>) -> Response {
    match state.catalog.load() {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!("/products failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("/products failed: {}", e),
            )
                .into_response()
        }
    }
}
