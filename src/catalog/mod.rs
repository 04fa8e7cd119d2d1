//! Catalog snapshot and loading
//!
//! The catalog is the full in-memory snapshot of categories, locations,
//! activities, and spaces loaded from the static dataset. It is loaded once
//! per process start, shared as an `Arc<Catalog>`, and replaced wholesale
//! rather than mutated.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::defaults::{ALL_ACTIVITIES_LABEL, ALL_AREAS_LABEL, FALLBACK_CATEGORIES};
use crate::models::{PriceBounds, Space};

pub mod loader;

pub use loader::CatalogLoader;

/// How the current catalog snapshot came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    /// Dataset loaded and validated successfully
    Loaded,
    /// Dataset unavailable or unreadable; fallback categories, empty grid
    Degraded,
}

/// Immutable snapshot of the loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct Catalog {
    /// Ordered category labels, including the distinguished "All Spaces"
    pub categories: Vec<String>,
    /// Ordered location labels, including the distinguished "All Areas"
    pub locations: Vec<String>,
    /// Ordered activity labels, including the distinguished "All Activities"
    pub activities: Vec<String>,
    pub spaces: Vec<Space>,
    /// Observed min/max of `price_per_hour`; (0, 0) when empty
    pub price_bounds: PriceBounds,
    pub origin: CatalogOrigin,
}

impl Catalog {
    /// Build a catalog from validated parts, deriving price bounds
    pub fn new(
        categories: Vec<String>,
        locations: Vec<String>,
        activities: Vec<String>,
        spaces: Vec<Space>,
    ) -> Self {
        let price_bounds = derive_price_bounds(&spaces);
        Self {
            categories,
            locations,
            activities,
            spaces,
            price_bounds,
            origin: CatalogOrigin::Loaded,
        }
    }

    /// Degraded catalog used when the dataset cannot be loaded.
    ///
    /// Hardcoded category labels, single-element default label lists, empty
    /// spaces. The page remains usable with an empty grid.
    pub fn fallback() -> Self {
        Self {
            categories: FALLBACK_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            locations: vec![ALL_AREAS_LABEL.to_string()],
            activities: vec![ALL_ACTIVITIES_LABEL.to_string()],
            spaces: Vec::new(),
            price_bounds: PriceBounds::ZERO,
            origin: CatalogOrigin::Degraded,
        }
    }

    /// Details lookup by id
    ///
    /// A missing id is a recoverable not-found condition for the caller,
    /// never a panic.
    pub fn find_space(&self, id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    pub fn is_degraded(&self) -> bool {
        self.origin == CatalogOrigin::Degraded
    }
}

fn derive_price_bounds(spaces: &[Space]) -> PriceBounds {
    if spaces.is_empty() {
        return PriceBounds::ZERO;
    }
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for space in spaces {
        min = min.min(space.price_per_hour);
        max = max.max(space.price_per_hour);
    }
    PriceBounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(id: &str, price: f64) -> Space {
        Space {
            id: id.to_string(),
            title: format!("Space {id}"),
            subtitle: String::new(),
            price_per_hour: price,
            rating: 4.0,
            review_count: None,
            features: Vec::new(),
            image: String::new(),
            gallery: None,
            categories: vec!["Photoshoot".to_string()],
            location: "North".to_string(),
            activities: vec!["Portrait".to_string()],
        }
    }

    #[test]
    fn test_price_bounds_derivation() {
        let catalog = Catalog::new(
            vec!["All Spaces".to_string()],
            vec!["All Areas".to_string()],
            vec!["All Activities".to_string()],
            vec![space("a", 750.0), space("b", 250.0), space("c", 1800.0)],
        );
        assert_eq!(catalog.price_bounds.min, 250.0);
        assert_eq!(catalog.price_bounds.max, 1800.0);
    }

    #[test]
    fn test_empty_catalog_has_zero_bounds() {
        let catalog = Catalog::new(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(catalog.price_bounds, PriceBounds::ZERO);
    }

    #[test]
    fn test_find_space_by_id() {
        let catalog = Catalog::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![space("a", 100.0), space("b", 200.0)],
        );
        assert_eq!(catalog.find_space("b").map(|s| s.price_per_hour), Some(200.0));
        assert!(catalog.find_space("missing").is_none());
    }

    #[test]
    fn test_fallback_is_degraded_and_empty() {
        let catalog = Catalog::fallback();
        assert!(catalog.is_degraded());
        assert!(catalog.spaces.is_empty());
        assert_eq!(catalog.categories.len(), FALLBACK_CATEGORIES.len());
    }
}
