//! Health check HTTP handlers

use axum::{extract::State, response::IntoResponse};

use crate::web::{
    AppState,
    responses::{HealthResponse, ok},
};

/// Health check endpoint
///
/// Reports liveness plus the catalog load state, so a degraded load is
/// visible to monitoring without being an error.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = if state.catalog.is_degraded() {
        HealthResponse::degraded()
    } else {
        HealthResponse::loaded(state.catalog.spaces.len())
    };
    ok(response)
}
