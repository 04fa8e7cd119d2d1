//! Space listing and details HTTP handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::filtering::{self, FilterSelection};
use crate::models::Space;
use crate::web::{
    AppState,
    extractors::SpaceFilterParams,
    responses::{handle_error, ok},
};

/// Filtered space listing payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpacesListResponse {
    pub spaces: Vec<Space>,
    /// Number of spaces after filtering
    pub total: usize,
    /// The resolved (clamped, defaulted) selection that produced this list
    pub selection: FilterSelection,
}

/// List spaces matching the current filter selection
#[utoipa::path(
    get,
    path = "/api/v1/spaces",
    tag = "spaces",
    params(SpaceFilterParams),
    responses(
        (status = 200, description = "Filtered spaces retrieved successfully", body = SpacesListResponse)
    )
)]
pub async fn list_spaces(
    State(state): State<AppState>,
    params: SpaceFilterParams,
) -> impl IntoResponse {
    let selection = params.into_selection(&state.catalog);
    let spaces: Vec<Space> = filtering::select(&state.catalog.spaces, &selection)
        .into_iter()
        .cloned()
        .collect();

    let total = spaces.len();
    ok(SpacesListResponse {
        spaces,
        total,
        selection,
    })
}

/// Get one space by id
///
/// An unknown id is a recoverable not-found condition; the response carries
/// a recovery link back to the listing.
#[utoipa::path(
    get,
    path = "/api/v1/spaces/{id}",
    tag = "spaces",
    params(
        ("id" = String, Path, description = "Space identifier")
    ),
    responses(
        (status = 200, description = "Space retrieved successfully", body = Space),
        (status = 404, description = "Space not found")
    )
)]
pub async fn get_space(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.find_space(&id) {
        Some(space) => ok(space.clone()),
        None => handle_error(AppError::not_found("space", id)),
    }
}
