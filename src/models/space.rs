//! Space model implementations

use crate::models::Space;

impl Space {
    /// Check if the space belongs to a category (membership, not equality)
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Check if the space supports an activity
    pub fn supports_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Gallery images for the details view
    ///
    /// Prefers the explicit gallery; falls back to the single card image.
    /// A space with neither renders without images rather than erroring.
    pub fn gallery_images(&self) -> Vec<&str> {
        match &self.gallery {
            Some(gallery) if !gallery.is_empty() => gallery.iter().map(String::as_str).collect(),
            _ if !self.image.is_empty() => vec![self.image.as_str()],
            _ => Vec::new(),
        }
    }
}
