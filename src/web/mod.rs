//! Web layer module
//!
//! This module provides the HTTP interface for the WhattaPlace catalog
//! service. Handlers are thin and delegate to the catalog, filtering, and
//! booking modules; responses use one standardized envelope; errors map to
//! appropriate HTTP status codes at a single place.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::{AppResult, WebError};
use crate::services::BookingService;

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod responses;

// Re-export commonly used types
pub use extractors::SpaceFilterParams;
pub use responses::{ApiResponse, HealthResponse, handle_error, handle_result, ok};

/// Shared application state
///
/// The catalog snapshot is immutable for the process lifetime and owned
/// here; handlers receive it by clone of the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub booking: BookingService,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            booking: BookingService::new(),
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState, config: &Config) -> Router {
    let cors = if config.cors.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/catalog", get(handlers::catalog::get_catalog))
        .route("/api/v1/spaces", get(handlers::spaces::list_spaces))
        .route("/api/v1/spaces/{id}", get(handlers::spaces::get_space))
        .route("/api/v1/bookings", post(handlers::bookings::submit_booking))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, catalog: Arc<Catalog>) -> AppResult<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
            .parse()
            .map_err(|e| WebError::BindFailed {
                addr: format!("{}:{}", config.web.host, config.web.port),
                message: format!("invalid listen address: {e}"),
            })?;

        let state = AppState::new(catalog);
        let app = create_router(state, config);

        Ok(Self { app, addr })
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Bind and serve until shutdown (ctrl-c)
    pub async fn serve(self) -> AppResult<()> {
        let listener =
            tokio::net::TcpListener::bind(self.addr)
                .await
                .map_err(|e| WebError::BindFailed {
                    addr: self.addr.to_string(),
                    message: e.to_string(),
                })?;

        info!("Web server listening on {}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| WebError::BindFailed {
                addr: self.addr.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {}", e);
    }
    info!("Shutdown signal received");
}
