//! Canonical fallback fleet
//!
//! Six hand-picked vehicles that span sedan, SUV, EV, truck, luxury and
//! budget. Installed whenever no snapshot exists and the persisted source
//! cannot be read, and written to disk by the seed command.

use super::vehicle::{IN_STOCK, VehicleRecord};

struct Spec<'a> {
    id: &'a str,
    make: &'a str,
    model: &'a str,
    vehicle_type: &'a str,
    category: &'a str,
    price: f64,
    mpg: (u32, u32),
    safety_rating: u8,
    drivetrain: &'a str,
    fuel_type: &'a str,
    features: [&'a str; 5],
    colors: [&'a str; 5],
    stock_count: u32,
    description: &'a str,
}

impl Spec<'_> {
    fn build(self) -> VehicleRecord {
        VehicleRecord {
            id: self.id.to_string(),
            make: self.make.to_string(),
            model: self.model.to_string(),
            year: 2024,
            vehicle_type: self.vehicle_type.to_string(),
            category: self.category.to_string(),
            price: self.price,
            mpg_city: self.mpg.0,
            mpg_highway: self.mpg.1,
            seating_capacity: 5,
            safety_rating: self.safety_rating,
            drivetrain: self.drivetrain.to_string(),
            fuel_type: self.fuel_type.to_string(),
            features: self.features.iter().map(|s| s.to_string()).collect(),
            colors_available: self.colors.iter().map(|s| s.to_string()).collect(),
            availability: IN_STOCK.to_string(),
            stock_count: self.stock_count,
            description: self.description.to_string(),
        }
    }
}

/// Build the canonical six-vehicle fleet.
///
/// Deterministic: every call returns the same records in the same order.
pub fn canonical_fleet() -> Vec<VehicleRecord> {
    vec![
        Spec {
            id: "V001",
            make: "Toyota",
            model: "Camry",
            vehicle_type: "Sedan",
            category: "family",
            price: 28_000.0,
            mpg: (28, 39),
            safety_rating: 5,
            drivetrain: "FWD",
            fuel_type: "Hybrid",
            features: [
                "Backup Camera",
                "Bluetooth",
                "Lane Assist",
                "Adaptive Cruise Control",
                "Automatic Emergency Braking",
            ],
            colors: ["White", "Black", "Silver", "Red", "Blue"],
            stock_count: 12,
            description: "Dependable hybrid family sedan with strong fuel economy and a full safety suite",
        }
        .build(),
        Spec {
            id: "V002",
            make: "Honda",
            model: "CR-V",
            vehicle_type: "Compact SUV",
            category: "family",
            price: 32_000.0,
            mpg: (27, 33),
            safety_rating: 5,
            drivetrain: "AWD",
            fuel_type: "Gasoline",
            features: [
                "Backup Camera",
                "Bluetooth",
                "Adaptive Cruise Control",
                "Blind Spot Monitor",
                "Spacious Interior",
            ],
            colors: ["Silver", "White", "Gray", "Blue", "Black"],
            stock_count: 8,
            description: "Versatile compact SUV for everyday family duty, known for safety and cargo room",
        }
        .build(),
        Spec {
            id: "V003",
            make: "Tesla",
            model: "Model 3",
            vehicle_type: "Electric Sedan",
            category: "eco",
            price: 42_000.0,
            mpg: (132, 121),
            safety_rating: 5,
            drivetrain: "RWD",
            fuel_type: "Electric",
            features: [
                "Autopilot",
                "Touchscreen Display",
                "Over-the-air Updates",
                "Heated Seats",
                "Premium Audio System",
            ],
            colors: ["White", "Black", "Red", "Blue", "Gray"],
            stock_count: 7,
            description: "Tech-forward electric sedan with driver assistance and zero tailpipe emissions",
        }
        .build(),
        Spec {
            id: "V004",
            make: "Ford",
            model: "F-150",
            vehicle_type: "Pickup Truck",
            category: "work",
            price: 38_000.0,
            mpg: (20, 26),
            safety_rating: 4,
            drivetrain: "4WD",
            fuel_type: "Gasoline",
            features: [
                "Towing Package",
                "Large Bed",
                "Trailer Assist",
                "Off-road Capability",
                "Sync 4 Infotainment",
            ],
            colors: ["White", "Black", "Red", "Blue", "Gray"],
            stock_count: 9,
            description: "Durable full-size pickup built for hauling, towing and job-site work",
        }
        .build(),
        Spec {
            id: "V005",
            make: "BMW",
            model: "X3",
            vehicle_type: "Luxury SUV",
            category: "luxury",
            price: 48_000.0,
            mpg: (23, 29),
            safety_rating: 5,
            drivetrain: "AWD",
            fuel_type: "Gasoline",
            features: [
                "Leather Seats",
                "Panoramic Sunroof",
                "Heads-up Display",
                "Harman Kardon Sound",
                "Parking Assistant Plus",
            ],
            colors: ["Black", "White", "Blue", "Silver", "Gray"],
            stock_count: 5,
            description: "Premium SUV with a refined cabin and high-end comfort features",
        }
        .build(),
        Spec {
            id: "V006",
            make: "Hyundai",
            model: "Elantra",
            vehicle_type: "Compact Sedan",
            category: "budget",
            price: 22_000.0,
            mpg: (31, 40),
            safety_rating: 4,
            drivetrain: "FWD",
            fuel_type: "Gasoline",
            features: [
                "Touchscreen Display",
                "Apple CarPlay",
                "Android Auto",
                "Lane Keeping Assist",
                "Forward Collision Avoidance",
            ],
            colors: ["White", "Black", "Silver", "Red", "Blue"],
            stock_count: 15,
            description: "Value-focused compact sedan with good mileage and a long warranty",
        }
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fleet_has_six_valid_in_stock_vehicles() {
        let fleet = canonical_fleet();
        assert_eq!(fleet.len(), 6);
        for v in &fleet {
            assert!(v.validate().is_ok(), "{} should be valid", v.id);
            assert!(v.is_in_stock());
        }
    }

    #[test]
    fn test_fleet_ids_are_unique() {
        let fleet = canonical_fleet();
        let ids: HashSet<_> = fleet.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), fleet.len());
    }

    #[test]
    fn test_fleet_spans_categories() {
        let categories: HashSet<_> = canonical_fleet()
            .into_iter()
            .map(|v| v.category)
            .collect();
        for expected in ["family", "eco", "work", "luxury", "budget"] {
            assert!(categories.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_fleet_is_deterministic() {
        assert_eq!(canonical_fleet(), canonical_fleet());
    }
}
