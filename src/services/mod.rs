//! Service layer
//!
//! Business logic sits here, behind thin web handlers.

pub mod booking;

pub use booking::BookingService;
