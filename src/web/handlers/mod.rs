//! HTTP request handlers organized by domain
//!
//! Handlers stay thin: parameter extraction and response shaping here,
//! catalog and booking logic in the owning modules.

pub mod bookings;
pub mod catalog;
pub mod health;
pub mod spaces;
