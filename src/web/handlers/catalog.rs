//! Catalog snapshot HTTP handlers

use axum::{extract::State, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CatalogOrigin;
use crate::filtering::FilterSelection;
use crate::models::PriceBounds;
use crate::web::{AppState, responses::ok};

/// Catalog snapshot payload: everything the listing page needs to render
/// its tabs and filter bar before asking for spaces
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub activities: Vec<String>,
    pub price_bounds: PriceBounds,
    pub total_spaces: usize,
    pub origin: CatalogOrigin,
    /// Initial filter selection derived from the catalog
    pub default_selection: FilterSelection,
}

/// Get the loaded catalog snapshot
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog retrieved successfully", body = CatalogResponse)
    )
)]
pub async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = &state.catalog;
    ok(CatalogResponse {
        categories: catalog.categories.clone(),
        locations: catalog.locations.clone(),
        activities: catalog.activities.clone(),
        price_bounds: catalog.price_bounds,
        total_spaces: catalog.spaces.len(),
        origin: catalog.origin,
        default_selection: FilterSelection::defaults(catalog),
    })
}
