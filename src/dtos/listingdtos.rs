use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::models::listingmodel::PropertyType;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub sub_type: Option<String>,

    // Location
    #[validate(length(min = 1, message = "Province is required"))]
    pub province: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    // Specifications
    #[validate(range(min = 0, message = "Price must be non-negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Area must be non-negative"))]
    pub area: i64,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,

    #[serde(default)]
    pub parking: bool,

    // Image URLs, first entry is the cover
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    // Contact
    #[validate(length(min = 1, message = "Contact phone is required"))]
    pub contact_phone: String,

    #[validate(length(min = 1, message = "Contact name is required"))]
    pub contact_name: String,
}

/// Search criteria applied conjunctively; an absent field is "no constraint".
/// Unknown fields are rejected at deserialization time.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchFiltersDto {
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,

    pub province: Option<String>,
    pub city: Option<String>,

    #[validate(range(min = 0, message = "minPrice must be non-negative"))]
    pub min_price: Option<i64>,

    #[validate(range(min = 0, message = "maxPrice must be non-negative"))]
    pub max_price: Option<i64>,

    #[validate(range(min = 0, message = "minArea must be non-negative"))]
    pub min_area: Option<i64>,

    #[validate(range(min = 0, message = "maxArea must be non-negative"))]
    pub max_area: Option<i64>,

    // Exact match, not "at least"
    pub bedrooms: Option<i32>,

    pub featured: Option<bool>,
}

impl SearchFiltersDto {
    /// Paired bounds must be ordered; rejected at the boundary so the
    /// evaluator only ever sees a structurally valid filter.
    pub fn validate_bounds(&self) -> Result<(), ValidationError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                let mut error = ValidationError::new("invalid_price_range");
                error.message = Some(Cow::from("minPrice must not exceed maxPrice"));
                return Err(error);
            }
        }

        if let (Some(min), Some(max)) = (self.min_area, self.max_area) {
            if min > max {
                let mut error = ValidationError::new("invalid_area_range");
                error.message = Some(Cow::from("minArea must not exceed maxArea"));
                return Err(error);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQueryDto {
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
}
