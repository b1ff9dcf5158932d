use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    Land,
    Commercial,
    Industrial,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,

    // Basic listing info
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub sub_type: Option<String>,

    // Location details (exact strings, no normalization)
    pub province: String,
    pub city: String,
    pub address: String,

    // Specifications
    pub price: i64, // in tomans
    pub area: i64,  // in square meters
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub parking: bool,

    // Media: non-empty, first entry is the cover image
    pub images: Vec<String>,

    pub featured: bool,

    // Contact
    pub contact_phone: String,
    pub contact_name: String,

    pub created_at: DateTime<Utc>,
}
