/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Catalog defaults
pub const DEFAULT_DATASET_SOURCE: &str = "./data/spaces.json";

// CORS defaults
pub const DEFAULT_CORS_ALLOW_ANY_ORIGIN: bool = true;

// Distinguished labels: sentinel values meaning "no constraint" on a
// filter dimension. These must match the labels shipped in the dataset.
pub const ALL_SPACES_LABEL: &str = "All Spaces";
pub const ALL_AREAS_LABEL: &str = "All Areas";
pub const ALL_ACTIVITIES_LABEL: &str = "All Activities";

/// Category list used when the dataset cannot be loaded at all.
///
/// The page stays usable with an empty grid; these labels keep the
/// category tabs rendering.
pub const FALLBACK_CATEGORIES: [&str; 9] = [
    ALL_SPACES_LABEL,
    "Photoshoot",
    "Video Shoot",
    "Workshops",
    "Podcast",
    "Dance shoot",
    "Film Shoot",
    "Events",
    "Exhibitions",
];
