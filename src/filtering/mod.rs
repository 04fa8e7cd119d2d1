//! Space filtering and selection
//!
//! The filter model is a value object ([`FilterSelection`]) plus one pure
//! function ([`select`]). A selection is replaced wholesale on every edit,
//! never mutated in place, so the `price_min <= price_max` invariant is
//! enforced at construction and edit time and holds everywhere else.
//!
//! All four stages are conjunctive and commutative; `select` is a stable
//! filter (output preserves input order) evaluated once per space.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::Catalog;
use crate::config::defaults::{ALL_ACTIVITIES_LABEL, ALL_AREAS_LABEL, ALL_SPACES_LABEL};
use crate::models::{PriceBounds, Space};

/// Current user-chosen filter constraints
///
/// The distinguished labels ("All Spaces", "All Areas", "All Activities")
/// mean "no constraint" on their dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub category: String,
    pub location: String,
    pub activity: String,
    pub price_min: f64,
    pub price_max: f64,
}

impl FilterSelection {
    /// Initial selection for a freshly loaded catalog: distinguished labels
    /// on every dimension, price range spanning the observed bounds.
    pub fn defaults(catalog: &Catalog) -> Self {
        Self {
            category: catalog
                .categories
                .first()
                .cloned()
                .unwrap_or_else(|| ALL_SPACES_LABEL.to_string()),
            location: catalog
                .locations
                .first()
                .cloned()
                .unwrap_or_else(|| ALL_AREAS_LABEL.to_string()),
            activity: catalog
                .activities
                .first()
                .cloned()
                .unwrap_or_else(|| ALL_ACTIVITIES_LABEL.to_string()),
            price_min: catalog.price_bounds.min,
            price_max: catalog.price_bounds.max,
        }
    }

    /// Replace the minimum price, clamped to `[bounds.min, price_max]`
    pub fn with_price_min(self, value: f64, bounds: PriceBounds) -> Self {
        Self {
            price_min: value.max(bounds.min).min(self.price_max),
            ..self
        }
    }

    /// Replace the maximum price, clamped to `[price_min, bounds.max]`
    pub fn with_price_max(self, value: f64, bounds: PriceBounds) -> Self {
        Self {
            price_max: value.min(bounds.max).max(self.price_min),
            ..self
        }
    }
}

/// Category stage: distinguished label passes everything, otherwise
/// membership test on the space's category set
pub fn passes_category(space: &Space, category: &str) -> bool {
    category == ALL_SPACES_LABEL || space.has_category(category)
}

/// Price stage: inclusive on both ends
pub fn passes_price(space: &Space, price_min: f64, price_max: f64) -> bool {
    space.price_per_hour >= price_min && space.price_per_hour <= price_max
}

/// Location stage: distinguished label passes everything, otherwise exact
/// equality on the single location label
pub fn passes_location(space: &Space, location: &str) -> bool {
    location == ALL_AREAS_LABEL || space.location == location
}

/// Activity stage: distinguished label passes everything, otherwise
/// membership test on the space's activity set
pub fn passes_activity(space: &Space, activity: &str) -> bool {
    activity == ALL_ACTIVITIES_LABEL || space.supports_activity(activity)
}

/// Whether a space passes every stage of a selection
pub fn matches(space: &Space, selection: &FilterSelection) -> bool {
    passes_category(space, &selection.category)
        && passes_price(space, selection.price_min, selection.price_max)
        && passes_location(space, &selection.location)
        && passes_activity(space, &selection.activity)
}

/// Produce the visible subset of spaces for a selection
///
/// Stable: relative order of the input is preserved. No side effects, no
/// error path; a selection that matches nothing yields an empty result.
pub fn select<'a>(spaces: &'a [Space], selection: &FilterSelection) -> Vec<&'a Space> {
    spaces.iter().filter(|s| matches(s, selection)).collect()
}
