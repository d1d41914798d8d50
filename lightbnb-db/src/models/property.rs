//! New property listing validation

use serde::Deserialize;

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for the listing title
const MAX_TITLE_LEN: usize = 255;

/// Validated property listing, ready for insertion.
///
/// `cost_per_night` is in minor currency units (cents). Use
/// [`crate::models::to_minor_units`] to convert a price entered in dollars.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewProperty {
    /// Check the listing before it reaches the database.
    ///
    /// # Rules
    /// - title non-empty, max 255 characters
    /// - city non-empty
    /// - cost and room/parking counts not negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        require_text("city", &self.city, MAX_TITLE_LEN)?;

        let counts = [
            ("cost_per_night", self.cost_per_night),
            ("parking_spaces", self.parking_spaces),
            ("number_of_bathrooms", self.number_of_bathrooms),
            ("number_of_bedrooms", self.number_of_bedrooms),
        ];
        for (field, value) in counts {
            if value < 0 {
                return Err(ValidationError::Negative { field });
            }
        }

        Ok(())
    }
}
