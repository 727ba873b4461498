//! Conjunctive vehicle filter

use crate::inventory::VehicleRecord;

use super::predicate::VehiclePredicate;

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_lowercase()).collect()
}

/// A conjunction of predicates, always including [`VehiclePredicate::InStock`].
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFilter {
    predicates: Vec<VehiclePredicate>,
}

impl Default for VehicleFilter {
    fn default() -> Self {
        Self::in_stock()
    }
}

impl VehicleFilter {
    /// Filter matching every in-stock vehicle
    pub fn in_stock() -> Self {
        Self {
            predicates: vec![VehiclePredicate::InStock],
        }
    }

    /// Add one more condition (builder pattern)
    pub fn and(mut self, predicate: VehiclePredicate) -> Self {
        if predicate != VehiclePredicate::InStock {
            self.predicates.push(predicate);
        }
        self
    }

    /// Price in `[min, max]`
    pub fn budget(min: f64, max: f64) -> Self {
        Self::in_stock().and(VehiclePredicate::PriceBetween { min, max })
    }

    /// `type` or `category` equal to any of `types`, ignoring case
    pub fn types(types: &[String]) -> Self {
        Self::in_stock().and(VehiclePredicate::TypeOrCategory(lowercase_all(types)))
    }

    /// Any required feature appears as a substring of the feature list
    pub fn features(required: &[String]) -> Self {
        Self::in_stock().and(VehiclePredicate::AnyFeature(lowercase_all(required)))
    }

    /// `fuel_type` equal to any of `fuel_types`, ignoring case
    pub fn fuel_types(fuel_types: &[String]) -> Self {
        Self::in_stock().and(VehiclePredicate::FuelType(lowercase_all(fuel_types)))
    }

    pub fn predicates(&self) -> &[VehiclePredicate] {
        &self.predicates
    }

    /// Number of conditions beyond the implicit in-stock gate
    pub fn signal_count(&self) -> usize {
        self.predicates.len() - 1
    }

    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(vehicle))
    }

    /// Matching records in input order
    pub fn apply(&self, vehicles: &[VehicleRecord]) -> Vec<VehicleRecord> {
        vehicles.iter().filter(|v| self.matches(v)).cloned().collect()
    }

    pub fn describe(&self) -> String {
        self.predicates
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::canonical_fleet;

    fn ids(vehicles: &[VehicleRecord]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_budget_on_canonical_fleet() {
        let result = VehicleFilter::budget(0.0, 30_000.0).apply(&canonical_fleet());
        assert_eq!(ids(&result), vec!["V001", "V006"]);
    }

    #[test]
    fn test_budget_excludes_out_of_stock() {
        let mut fleet = canonical_fleet();
        fleet[5].availability = "sold".to_string();
        let result = VehicleFilter::budget(0.0, 30_000.0).apply(&fleet);
        assert_eq!(ids(&result), vec!["V001"]);
    }

    #[test]
    fn test_types_match_type_or_category() {
        let result = VehicleFilter::types(&strings(&["Luxury SUV", "BUDGET"])).apply(&canonical_fleet());
        assert_eq!(ids(&result), vec!["V005", "V006"]);
    }

    #[test]
    fn test_features_or_semantics() {
        let result = VehicleFilter::features(&strings(&["Sunroof", "towing"])).apply(&canonical_fleet());
        assert_eq!(ids(&result), vec!["V004", "V005"]);
    }

    #[test]
    fn test_fuel_types() {
        let result = VehicleFilter::fuel_types(&strings(&["hybrid", "Electric"])).apply(&canonical_fleet());
        assert_eq!(ids(&result), vec!["V001", "V003"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let result = VehicleFilter::budget(0.0, 1_000.0).apply(&canonical_fleet());
        assert!(result.is_empty());
        assert!(VehicleFilter::in_stock().apply(&[]).is_empty());
    }

    #[test]
    fn test_in_stock_is_never_duplicated() {
        let filter = VehicleFilter::in_stock().and(VehiclePredicate::InStock);
        assert_eq!(filter.predicates().len(), 1);
        assert_eq!(filter.signal_count(), 0);
    }
}
