//! Specialist category value object

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// Customer-priority axis served by one specialist agent.
///
/// The declaration order is the canonical order used when results from
/// several specialists are presented together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistCategory {
    Budget,
    Family,
    Luxury,
    Eco,
}

impl SpecialistCategory {
    pub const ALL: [SpecialistCategory; 4] = [
        SpecialistCategory::Budget,
        SpecialistCategory::Family,
        SpecialistCategory::Luxury,
        SpecialistCategory::Eco,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistCategory::Budget => "budget",
            SpecialistCategory::Family => "family",
            SpecialistCategory::Luxury => "luxury",
            SpecialistCategory::Eco => "eco",
        }
    }

    /// Keywords whose presence routes a query to this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SpecialistCategory::Budget => &["budget", "cheap", "affordable", "under", "cost"],
            SpecialistCategory::Family => &["family", "kids", "children", "safe", "safety"],
            SpecialistCategory::Luxury => &[
                "luxury",
                "premium",
                "high-end",
                "performance",
                "exclusive",
                "expensive",
            ],
            SpecialistCategory::Eco => &["eco", "electric", "hybrid", "efficient", "green"],
        }
    }

    /// Name under which this specialist is exposed as a tool
    pub fn tool_name(&self) -> &'static str {
        match self {
            SpecialistCategory::Budget => "budget_specialist",
            SpecialistCategory::Family => "family_specialist",
            SpecialistCategory::Luxury => "luxury_specialist",
            SpecialistCategory::Eco => "eco_specialist",
        }
    }

    /// Reverse of [`tool_name`](Self::tool_name)
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tool_name() == name)
    }
}

impl std::fmt::Display for SpecialistCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialistCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(SpecialistCategory::Budget),
            "family" => Ok(SpecialistCategory::Family),
            "luxury" => Ok(SpecialistCategory::Luxury),
            "eco" => Ok(SpecialistCategory::Eco),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}
