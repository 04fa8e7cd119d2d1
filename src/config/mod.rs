use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalog loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dataset source: an http(s) URL or a local file path
    #[serde(default = "default_dataset_source")]
    pub dataset_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allow any origin; listing pages are typically served from a
    /// different origin than this API
    #[serde(default = "default_cors_allow_any_origin")]
    pub allow_any_origin: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_dataset_source() -> String {
    DEFAULT_DATASET_SOURCE.to_string()
}

fn default_cors_allow_any_origin() -> bool {
    DEFAULT_CORS_ALLOW_ANY_ORIGIN
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset_source: default_dataset_source(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: default_cors_allow_any_origin(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            catalog: CatalogConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.web.host, DEFAULT_HOST);
        assert_eq!(config.web.port, DEFAULT_PORT);
        assert_eq!(config.catalog.dataset_source, DEFAULT_DATASET_SOURCE);
        assert!(config.cors.allow_any_origin);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [web]
            port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.web.port, 9090);
        assert_eq!(config.web.host, DEFAULT_HOST);
        assert_eq!(config.catalog.dataset_source, DEFAULT_DATASET_SOURCE);
    }

    #[test]
    fn test_fallback_categories_start_with_all_spaces() {
        assert_eq!(FALLBACK_CATEGORIES[0], ALL_SPACES_LABEL);
    }
}
