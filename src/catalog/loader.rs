//! Dataset loading and boundary validation
//!
//! The loader fetches the static dataset once per process start, validates
//! the loosely-typed JSON document at this single boundary, and converts it
//! into the strongly-typed [`Catalog`]. Everything past this module works
//! with validated entities only.
//!
//! Failure is terminal for the load but never for the process: any fetch or
//! parse failure degrades to [`Catalog::fallback`] with a warning.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::config::defaults::{ALL_ACTIVITIES_LABEL, ALL_AREAS_LABEL, FALLBACK_CATEGORIES};
use crate::errors::{CatalogError, CatalogResult};
use crate::models::Space;

/// Where the dataset lives
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Fetched over http(s), always revalidated
    Url(Url),
    /// Read from a local file (the shipped fixture)
    File(PathBuf),
}

impl DatasetSource {
    /// Interpret a configured source string: http(s) URLs are fetched,
    /// anything else is treated as a file path.
    pub fn parse(source: &str) -> CatalogResult<Self> {
        match Url::parse(source) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                Ok(DatasetSource::Url(url))
            }
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Ok(DatasetSource::File(path)),
                Err(()) => Err(CatalogError::UnsupportedSource {
                    source_str: source.to_string(),
                }),
            },
            // Bare paths fail URL parsing with RelativeUrlWithoutBase
            Err(_) => Ok(DatasetSource::File(PathBuf::from(source))),
            Ok(url) => Err(CatalogError::UnsupportedSource {
                source_str: url.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{url}"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw dataset document as shipped, before boundary validation
///
/// Every field is optional: malformed or partial documents degrade to
/// defaults rather than failing the load.
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    categories: Option<Vec<String>>,
    #[serde(default)]
    locations: Option<Vec<String>>,
    #[serde(default)]
    activities: Option<Vec<String>>,
    #[serde(default)]
    spaces: Option<Vec<serde_json::Value>>,
}

/// Catalog loader: one fetch per process start, no retry, no cache
pub struct CatalogLoader {
    source: DatasetSource,
    client: Client,
}

impl CatalogLoader {
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        Ok(Self::new(DatasetSource::parse(&config.dataset_source)?))
    }

    /// Load the catalog, degrading to the fallback on any failure.
    ///
    /// This is the only load entry point the application uses; it cannot
    /// fail. The underlying error is logged at WARN and discarded.
    pub async fn load(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => {
                info!(
                    "Catalog loaded from {}: {} spaces, {} categories, price bounds {:.0}-{:.0}",
                    self.source,
                    catalog.spaces.len(),
                    catalog.categories.len(),
                    catalog.price_bounds.min,
                    catalog.price_bounds.max,
                );
                catalog
            }
            Err(e) => {
                warn!(
                    "Catalog load from {} failed, serving degraded catalog: {}",
                    self.source, e
                );
                Catalog::fallback()
            }
        }
    }

    /// Fetch, parse, and validate the dataset
    pub async fn try_load(&self) -> CatalogResult<Catalog> {
        let body = match &self.source {
            DatasetSource::Url(url) => self.fetch(url).await?,
            DatasetSource::File(path) => tokio::fs::read_to_string(path).await?,
        };
        let raw: RawDataset = serde_json::from_str(&body)?;
        Ok(normalize(raw))
    }

    /// Fetch the dataset over HTTP, always revalidated.
    ///
    /// A timestamp query parameter busts intermediary caches that ignore
    /// the Cache-Control request header.
    async fn fetch(&self, url: &Url) -> CatalogResult<String> {
        let mut url = url.clone();
        let bust = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis().to_string())
            .unwrap_or_default();
        url.query_pairs_mut().append_pair("_", &bust);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Convert the raw document into a validated catalog.
///
/// Missing optional arrays get single-element default label lists; a
/// missing category list gets the full fallback sequence. Space records
/// that fail validation are dropped here with a warning, never propagated.
fn normalize(raw: RawDataset) -> Catalog {
    let categories = match raw.categories {
        Some(categories) if !categories.is_empty() => categories,
        _ => FALLBACK_CATEGORIES.iter().map(|s| s.to_string()).collect(),
    };
    let locations = match raw.locations {
        Some(locations) if !locations.is_empty() => locations,
        _ => vec![ALL_AREAS_LABEL.to_string()],
    };
    let activities = match raw.activities {
        Some(activities) if !activities.is_empty() => activities,
        _ => vec![ALL_ACTIVITIES_LABEL.to_string()],
    };

    let mut spaces = Vec::new();
    for (index, value) in raw.spaces.unwrap_or_default().into_iter().enumerate() {
        match serde_json::from_value::<Space>(value) {
            Ok(space) if space.id.is_empty() => {
                warn!("Dropping space record {index}: empty id");
            }
            Ok(space) if space.price_per_hour < 0.0 => {
                warn!("Dropping space record {index} ({}): negative price", space.id);
            }
            Ok(space) => {
                if spaces.iter().any(|s: &Space| s.id == space.id) {
                    warn!("Dropping space record {index}: duplicate id {}", space.id);
                } else {
                    spaces.push(space);
                }
            }
            Err(e) => {
                warn!("Dropping malformed space record {index}: {e}");
            }
        }
    }

    Catalog::new(categories, locations, activities, spaces)
}
