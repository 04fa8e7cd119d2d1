//! HTTP response types and utilities
//!
//! This module provides standardized response types and error handling
//! for the web layer, ensuring consistent API responses across all endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult, WebError};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn error_with_details(message: String, details: HashMap<String, String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: Some(details),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Catalog load state: "loaded" or "degraded"
    pub catalog: String,
    /// Number of spaces in the current snapshot
    pub spaces: usize,
}

impl HealthResponse {
    pub fn loaded(spaces: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            catalog: "loaded".to_string(),
            spaces,
        }
    }

    /// Healthy but serving the fallback catalog
    pub fn degraded() -> Self {
        Self {
            status: "healthy".to_string(),
            catalog: "degraded".to_string(),
            spaces: 0,
        }
    }
}

/// Create a 200 response wrapping data in the standard envelope
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// Helper function to convert AppResult to HTTP response
pub fn handle_result<T>(result: AppResult<T>) -> Response
where
    T: Serialize,
{
    match result {
        Ok(data) => ok(data),
        Err(error) => handle_error(error),
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, body) = match &error {
        AppError::NotFound { resource, id } => {
            // Recoverable not-found: point the client back at the listing
            let mut details = HashMap::new();
            details.insert("recovery".to_string(), "/api/v1/spaces".to_string());
            (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::error_with_details(
                    format!("{resource} '{id}' not found"),
                    details,
                ),
            )
        }
        AppError::Validation { .. } => (
            StatusCode::BAD_REQUEST,
            ApiResponse::<()>::error(error.to_string()),
        ),
        AppError::Web(WebError::InvalidRequest { .. }) | AppError::Web(WebError::JsonParse(_)) => (
            StatusCode::BAD_REQUEST,
            ApiResponse::<()>::error(error.to_string()),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::<()>::error(error.to_string()),
        ),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_with_recovery_link() {
        let response = handle_error(AppError::not_found("space", "missing"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = handle_error(AppError::validation("bad input"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = handle_error(AppError::internal("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
