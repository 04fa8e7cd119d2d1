use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whattaplace::{catalog::CatalogLoader, config::Config, web::WebServer};

#[derive(Parser)]
#[command(name = "whattaplace")]
#[command(version = "0.1.0")]
#[command(about = "A bookable creative spaces catalog service with filtering")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Dataset source (overrides config file): http(s) URL or file path
    #[arg(short = 'd', long, value_name = "SOURCE")]
    dataset: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("whattaplace={},tower_http=trace", cli.log_level)
    } else {
        format!("whattaplace={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting WhattaPlace catalog service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration from specified file
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(dataset) = cli.dataset {
        config.catalog.dataset_source = dataset;
    }

    info!("Using dataset source: {}", config.catalog.dataset_source);

    // One load per process start; a failed load degrades to the fallback
    // catalog instead of aborting startup.
    let catalog = match CatalogLoader::from_config(&config.catalog) {
        Ok(loader) => loader.load().await,
        Err(e) => {
            tracing::warn!(
                "Dataset source rejected ({}), serving degraded catalog",
                e
            );
            whattaplace::catalog::Catalog::fallback()
        }
    };

    if catalog.is_degraded() {
        tracing::warn!("Serving degraded catalog: fallback categories, empty space grid");
    }

    let web_server = WebServer::new(&config, Arc::new(catalog))?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );

    web_server.serve().await?;

    Ok(())
}
