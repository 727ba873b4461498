//! Vehicle record entity

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// Availability value that gates every filter result.
pub const IN_STOCK: &str = "in_stock";

/// A single vehicle in the inventory (Entity)
///
/// Records are immutable once loaded. Field names match the persisted
/// JSON layout, so a record round-trips through `serde_json` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Body style, e.g. "Compact SUV" or "Pickup Truck"
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// One of family / eco / luxury / budget / work
    pub category: String,
    pub price: f64,
    pub mpg_city: u32,
    pub mpg_highway: u32,
    pub seating_capacity: u32,
    pub safety_rating: u8,
    pub drivetrain: String,
    pub fuel_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub colors_available: Vec<String>,
    pub availability: String,
    pub stock_count: u32,
    #[serde(default)]
    pub description: String,
}

impl VehicleRecord {
    /// Whether the vehicle can be offered to a customer right now.
    pub fn is_in_stock(&self) -> bool {
        self.availability == IN_STOCK
    }

    /// "2024 Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Lowercased features joined by single spaces.
    ///
    /// Feature filters test substrings against this text, so "camera"
    /// matches "Backup Camera".
    pub fn feature_text(&self) -> String {
        self.features
            .iter()
            .map(|f| f.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Case-insensitive membership test on `colors_available`.
    /// "Gray" and "Grey" are the same color.
    pub fn has_color(&self, color: &str) -> bool {
        let wanted = color_key(color);
        self.colors_available.iter().any(|c| color_key(c) == wanted)
    }

    /// Check the record invariants: price ≥ 0, safety rating in 1..=5,
    /// at least one seat.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::invalid_record(
                &self.id,
                format!("price must be non-negative, got {}", self.price),
            ));
        }
        if !(1..=5).contains(&self.safety_rating) {
            return Err(DomainError::invalid_record(
                &self.id,
                format!("safety_rating must be 1-5, got {}", self.safety_rating),
            ));
        }
        if self.seating_capacity == 0 {
            return Err(DomainError::invalid_record(
                &self.id,
                "seating_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

fn color_key(color: &str) -> String {
    let lower = color.trim().to_lowercase();
    match lower.as_str() {
        "grey" => "gray".to_string(),
        _ => lower,
    }
}
