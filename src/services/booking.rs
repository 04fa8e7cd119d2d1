//! Booking submission handling
//!
//! Bookings are not persisted: a submission is validated for shape,
//! logged, and acknowledged with a generated reference. Availability
//! and conflict checking are out of scope.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::{BookingReceipt, BookingRequest};

#[derive(Debug, Clone, Default)]
pub struct BookingService;

impl BookingService {
    pub fn new() -> Self {
        Self
    }

    /// Accept a booking submission against the loaded catalog.
    ///
    /// The space must exist and contact fields must be present; beyond
    /// that the submission is logged and acknowledged, never stored.
    pub fn submit(&self, catalog: &Catalog, request: &BookingRequest) -> AppResult<BookingReceipt> {
        let space = catalog
            .find_space(&request.space_id)
            .ok_or_else(|| AppError::not_found("space", &request.space_id))?;

        if request.name.trim().is_empty() {
            return Err(AppError::validation("Booking name must not be empty"));
        }
        if request.email.trim().is_empty() || !request.email.contains('@') {
            return Err(AppError::validation("Booking email is missing or invalid"));
        }
        if request.date.trim().is_empty() {
            return Err(AppError::validation("Booking date must not be empty"));
        }

        let receipt = BookingReceipt {
            reference: Uuid::new_v4(),
            space_id: space.id.clone(),
            received_at: Utc::now(),
        };

        info!(
            "Booking submission {} for space '{}' ({}): {} {}-{}, contact {} <{}> {}",
            receipt.reference,
            space.title,
            space.id,
            request.date,
            request.start_time,
            request.end_time,
            request.name,
            request.email,
            request.phone,
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Space;

    fn catalog_with_one_space() -> Catalog {
        Catalog::new(
            vec!["All Spaces".to_string()],
            vec!["All Areas".to_string()],
            vec!["All Activities".to_string()],
            vec![Space {
                id: "loft-1".to_string(),
                title: "Daylight Loft".to_string(),
                subtitle: String::new(),
                price_per_hour: 900.0,
                rating: 4.7,
                review_count: None,
                features: Vec::new(),
                image: String::new(),
                gallery: None,
                categories: vec!["Photoshoot".to_string()],
                location: "Bandra".to_string(),
                activities: vec!["Portrait".to_string()],
            }],
        )
    }

    fn request(space_id: &str) -> BookingRequest {
        BookingRequest {
            space_id: space_id.to_string(),
            date: "2026-09-12".to_string(),
            start_time: "10:00".to_string(),
            end_time: "13:00".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }

    #[test]
    fn test_submission_is_acknowledged() {
        let catalog = catalog_with_one_space();
        let receipt = BookingService::new()
            .submit(&catalog, &request("loft-1"))
            .unwrap();
        assert_eq!(receipt.space_id, "loft-1");
    }

    #[test]
    fn test_unknown_space_is_not_found() {
        let catalog = catalog_with_one_space();
        let err = BookingService::new()
            .submit(&catalog, &request("missing"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_blank_contact_fields_rejected() {
        let catalog = catalog_with_one_space();
        let service = BookingService::new();

        let mut req = request("loft-1");
        req.name = "  ".to_string();
        assert!(matches!(
            service.submit(&catalog, &req),
            Err(AppError::Validation { .. })
        ));

        let mut req = request("loft-1");
        req.email = "not-an-email".to_string();
        assert!(matches!(
            service.submit(&catalog, &req),
            Err(AppError::Validation { .. })
        ));
    }
}
