//! OpenAPI documentation generation using utoipa
//!
//! Handler functions are annotated with `#[utoipa::path]`; this module
//! collects them into one document served as JSON.

use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::web::handlers;

/// OpenAPI specification for the WhattaPlace catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WhattaPlace Catalog API",
        version = "0.1.0",
        description = "Bookable creative spaces: catalog snapshot, filtered space listing, details lookup, and booking submission.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::catalog::get_catalog,
        handlers::spaces::list_spaces,
        handlers::spaces::get_space,
        handlers::bookings::submit_booking,
        handlers::health::health_check,
    ),
    tags(
        (name = "catalog", description = "Catalog snapshot"),
        (name = "spaces", description = "Space listing and details"),
        (name = "bookings", description = "Booking submission"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn serve_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
