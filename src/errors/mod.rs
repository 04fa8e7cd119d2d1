//! Centralized error handling for the WhattaPlace catalog service
//!
//! This module provides a unified error system across all application
//! layers so that every failure mode maps to a predictable, recoverable
//! outcome. Note that the catalog load path deliberately does NOT surface
//! errors to callers: a failed load degrades to a fallback catalog and is
//! reported here only for logging.
//!
//! # Error Categories
//!
//! - **Catalog Errors**: dataset fetch, parse, and validation failures
//! - **Validation Errors**: input validation and business rule violations
//! - **Web Errors**: HTTP request/response handling issues

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Catalog Results
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Web Results
pub type WebResult<T> = Result<T, WebError>;
