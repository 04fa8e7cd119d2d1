use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod space;

/// A bookable listing record
///
/// Wire field names stay camelCase (`pricePerHour`, `reviewCount`) to match
/// the dataset document; serde renames at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(description = "A bookable creative space listing")]
pub struct Space {
    /// Opaque unique identifier, stable within a catalog
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Hourly rate; non-negative
    pub price_per_hour: f64,
    /// Display-only score
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Ordered display features ("Natural light", "Backdrops", ...)
    pub features: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    /// Category labels the listing belongs to; membership-tested, not exclusive
    pub categories: Vec<String>,
    /// Single location label
    pub location: String,
    /// Activity labels supported at the venue
    pub activities: Vec<String>,
}

/// Observed min/max of `price_per_hour` across a catalog; both 0 when empty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    pub const ZERO: PriceBounds = PriceBounds { min: 0.0, max: 0.0 };
}

/// Booking submission payload: the fields the booking form collects
///
/// Nothing is persisted; a submission is validated for shape, logged, and
/// acknowledged. Availability and conflict checking are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub space_id: String,
    /// Requested date, as entered ("2026-09-12")
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Acknowledgement returned for a logged booking submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    /// Generated reference for the submission
    pub reference: Uuid,
    pub space_id: String,
    pub received_at: DateTime<Utc>,
}
