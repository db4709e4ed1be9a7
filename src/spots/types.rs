//! Types for tourist spot operations

use serde::{Deserialize, Serialize};

/// A tourist spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouristSpot {
    /// The spot id
    pub id: i64,

    /// Spot name
    pub name: String,

    /// Description shown to visitors
    pub description: Option<String>,

    /// Category, e.g. `BEACH` or `HISTORICAL`
    pub category: Option<String>,

    /// Location text (barangay / landmark)
    pub location: Option<String>,

    /// Entrance fee, when one is charged
    #[serde(rename = "entrance_fee")]
    pub entrance_fee: Option<f64>,

    /// Opening hours text
    #[serde(rename = "opening_hours")]
    pub opening_hours: Option<String>,

    /// URLs of uploaded images
    #[serde(default)]
    pub images: Vec<String>,

    /// Whether the spot is currently open to visitors
    #[serde(rename = "is_open")]
    pub is_open: Option<bool>,

    /// Update timestamp
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

/// An image file attached to a spot draft
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    /// File name sent in the multipart part
    pub file_name: String,

    /// MIME type, e.g. `image/jpeg`
    pub content_type: String,

    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Fields for creating or updating a tourist spot.
///
/// Attached images are sent as `multipart/form-data`; a draft without
/// images goes out as plain JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SpotDraft {
    /// Spot name
    pub name: String,

    /// Description shown to visitors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Location text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Entrance fee
    #[serde(rename = "entrance_fee", skip_serializing_if = "Option::is_none")]
    pub entrance_fee: Option<f64>,

    /// Opening hours text
    #[serde(rename = "opening_hours", skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,

    /// Image files to upload alongside the fields
    #[serde(skip)]
    pub images: Vec<ImageAttachment>,
}

/// Badge color for a spot category, with a neutral gray fallback for
/// categories the palette does not know.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "BEACH" => "#0ea5e9",
        "NATURE" => "#22c55e",
        "HISTORICAL" => "#f59e0b",
        "ADVENTURE" => "#ef4444",
        "CULTURAL" => "#8b5cf6",
        "FOOD" => "#f97316",
        _ => "#6b7280",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_palette() {
        assert_eq!(category_color("BEACH"), "#0ea5e9");
        assert_eq!(category_color("HISTORICAL"), "#f59e0b");
    }

    #[test]
    fn unknown_category_falls_back_to_gray() {
        assert_eq!(category_color("UNKNOWN_CATEGORY"), "#6b7280");
        assert_eq!(category_color(""), "#6b7280");
    }
}
