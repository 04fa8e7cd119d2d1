//! Booking submission HTTP handlers

use axum::{Json, extract::State, response::IntoResponse};

use crate::models::{BookingReceipt, BookingRequest};
use crate::web::{AppState, responses::handle_result};

/// Submit a booking request
///
/// Submissions are validated, logged, and acknowledged; nothing is
/// persisted and no availability checking happens.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "bookings",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking acknowledged", body = BookingReceipt),
        (status = 400, description = "Invalid booking submission"),
        (status = 404, description = "Space not found")
    )
)]
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> impl IntoResponse {
    handle_result(state.booking.submit(&state.catalog, &request))
}
