//! Request extractors and validation
//!
//! Filter parameters arrive as an optional query string; absent parameters
//! mean "no constraint" on their dimension. Price bounds are clamped against
//! the loaded catalog rather than rejected, so this extractor has no
//! validation failure mode beyond an unparseable query string.

use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::catalog::Catalog;
use crate::filtering::FilterSelection;
use crate::web::responses::ApiResponse;

/// Filter selection parameters from the query string
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SpaceFilterParams {
    /// Category label; absent or "All Spaces" means no constraint
    #[serde(default)]
    pub category: Option<String>,
    /// Location label; absent or "All Areas" means no constraint
    #[serde(default)]
    pub location: Option<String>,
    /// Activity label; absent or "All Activities" means no constraint
    #[serde(default)]
    pub activity: Option<String>,
    /// Minimum hourly price; clamped to the catalog bounds
    #[serde(default)]
    pub price_min: Option<f64>,
    /// Maximum hourly price; clamped to the catalog bounds
    #[serde(default)]
    pub price_max: Option<f64>,
}

impl SpaceFilterParams {
    /// Resolve the parameters into a selection against a catalog.
    ///
    /// Starts from the catalog-derived defaults and applies the max edit
    /// before the min edit, so `price_min <= price_max` holds whatever the
    /// caller sent.
    pub fn into_selection(self, catalog: &Catalog) -> FilterSelection {
        let bounds = catalog.price_bounds;
        let mut selection = FilterSelection::defaults(catalog);

        if let Some(category) = self.category {
            selection.category = category;
        }
        if let Some(location) = self.location {
            selection.location = location;
        }
        if let Some(activity) = self.activity {
            selection.activity = activity;
        }
        if let Some(max) = self.price_max {
            selection = selection.with_price_max(max, bounds);
        }
        if let Some(min) = self.price_min {
            selection = selection.with_price_min(min, bounds);
        }

        selection
    }
}

impl<S> FromRequestParts<S> for SpaceFilterParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<SpaceFilterParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(
                        "Invalid filter parameters".to_string(),
                    )),
                )
                    .into_response()
            })?;

        Ok(params)
    }
}
