//! Vehicle predicates

use serde::{Deserialize, Serialize};

use crate::inventory::VehicleRecord;

/// A single structured condition on a [`VehicleRecord`].
///
/// String-valued variants hold lowercased values and compare
/// case-insensitively. Variants holding a list match when ANY listed
/// value matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VehiclePredicate {
    InStock,
    /// Inclusive on both ends
    PriceBetween { min: f64, max: f64 },
    PriceAtMost(f64),
    /// Matches either the `type` or the `category` column
    TypeOrCategory(Vec<String>),
    /// Substring test against the joined feature text
    AnyFeature(Vec<String>),
    FuelType(Vec<String>),
    Color(Vec<String>),
    Year(Vec<i32>),
    Make(Vec<String>),
    Model(Vec<String>),
    Drivetrain(Vec<String>),
    Seating(u32),
    SafetyRating(u8),
}

fn eq_any(value: &str, candidates: &[String]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}

impl VehiclePredicate {
    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        match self {
            VehiclePredicate::InStock => vehicle.is_in_stock(),
            VehiclePredicate::PriceBetween { min, max } => {
                vehicle.price >= *min && vehicle.price <= *max
            }
            VehiclePredicate::PriceAtMost(max) => vehicle.price <= *max,
            VehiclePredicate::TypeOrCategory(types) => {
                eq_any(&vehicle.vehicle_type, types) || eq_any(&vehicle.category, types)
            }
            VehiclePredicate::AnyFeature(required) => {
                let text = vehicle.feature_text();
                required.iter().any(|r| text.contains(r.as_str()))
            }
            VehiclePredicate::FuelType(fuels) => eq_any(&vehicle.fuel_type, fuels),
            VehiclePredicate::Color(colors) => colors.iter().any(|c| vehicle.has_color(c)),
            VehiclePredicate::Year(years) => years.contains(&vehicle.year),
            VehiclePredicate::Make(makes) => eq_any(&vehicle.make, makes),
            VehiclePredicate::Model(models) => eq_any(&vehicle.model, models),
            VehiclePredicate::Drivetrain(drives) => eq_any(&vehicle.drivetrain, drives),
            VehiclePredicate::Seating(seats) => vehicle.seating_capacity == *seats,
            VehiclePredicate::SafetyRating(stars) => vehicle.safety_rating == *stars,
        }
    }

    /// Short human-readable form, used in logs and the CLI
    pub fn describe(&self) -> String {
        match self {
            VehiclePredicate::InStock => "in stock".to_string(),
            VehiclePredicate::PriceBetween { min, max } => format!("price {min}..={max}"),
            VehiclePredicate::PriceAtMost(max) => format!("price <= {max}"),
            VehiclePredicate::TypeOrCategory(v) => format!("type/category in [{}]", v.join(", ")),
            VehiclePredicate::AnyFeature(v) => format!("any feature of [{}]", v.join(", ")),
            VehiclePredicate::FuelType(v) => format!("fuel in [{}]", v.join(", ")),
            VehiclePredicate::Color(v) => format!("color in [{}]", v.join(", ")),
            VehiclePredicate::Year(v) => format!(
                "year in [{}]",
                v.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", ")
            ),
            VehiclePredicate::Make(v) => format!("make in [{}]", v.join(", ")),
            VehiclePredicate::Model(v) => format!("model in [{}]", v.join(", ")),
            VehiclePredicate::Drivetrain(v) => format!("drivetrain in [{}]", v.join(", ")),
            VehiclePredicate::Seating(n) => format!("{n} seats"),
            VehiclePredicate::SafetyRating(n) => format!("{n}-star safety"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::canonical_fleet;

    fn by_id(id: &str) -> VehicleRecord {
        canonical_fleet().into_iter().find(|v| v.id == id).unwrap()
    }

    #[test]
    fn test_price_between_is_inclusive() {
        let camry = by_id("V001");
        assert!(VehiclePredicate::PriceBetween { min: 28_000.0, max: 28_000.0 }.matches(&camry));
        assert!(!VehiclePredicate::PriceBetween { min: 0.0, max: 27_999.0 }.matches(&camry));
    }

    #[test]
    fn test_type_or_category() {
        let crv = by_id("V002");
        let pred = |s: &str| VehiclePredicate::TypeOrCategory(vec![s.to_string()]);
        assert!(pred("compact suv").matches(&crv));
        assert!(pred("family").matches(&crv));
        assert!(!pred("suv").matches(&crv));
    }

    #[test]
    fn test_any_feature_is_substring() {
        let camry = by_id("V001");
        let pred = VehiclePredicate::AnyFeature(vec!["camera".to_string(), "sunroof".to_string()]);
        assert!(pred.matches(&camry));
        let pred = VehiclePredicate::AnyFeature(vec!["sunroof".to_string()]);
        assert!(!pred.matches(&camry));
    }

    #[test]
    fn test_exact_column_matches_ignore_case() {
        let tesla = by_id("V003");
        assert!(VehiclePredicate::FuelType(vec!["electric".to_string()]).matches(&tesla));
        assert!(VehiclePredicate::Make(vec!["tesla".to_string()]).matches(&tesla));
        assert!(VehiclePredicate::Model(vec!["model 3".to_string()]).matches(&tesla));
        assert!(VehiclePredicate::Drivetrain(vec!["rwd".to_string()]).matches(&tesla));
        assert!(!VehiclePredicate::FuelType(vec!["elec".to_string()]).matches(&tesla));
    }

    #[test]
    fn test_describe() {
        assert_eq!(VehiclePredicate::PriceAtMost(30_000.0).describe(), "price <= 30000");
        assert_eq!(VehiclePredicate::SafetyRating(5).describe(), "5-star safety");
    }
}
