//! Agent profile value object

use serde::{Deserialize, Serialize};

use super::instructions;
use crate::intent::SpecialistCategory;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Position of an agent in the routing hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role", content = "category")]
pub enum AgentRole {
    /// Top-level agent: routes to specialists and synthesizes
    Manager,
    /// Narrow agent for one customer-priority axis
    Specialist(SpecialistCategory),
}

impl AgentRole {
    /// Whether this role may call specialist and multi-agent tools
    pub fn can_delegate(&self) -> bool {
        matches!(self, AgentRole::Manager)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub role: AgentRole,
    pub instructions: String,
    pub model: String,
}

impl AgentProfile {
    pub fn manager(model: impl Into<String>) -> Self {
        Self {
            name: "Vehicle Recommendation Manager".to_string(),
            role: AgentRole::Manager,
            instructions: instructions::MANAGER.to_string(),
            model: model.into(),
        }
    }

    pub fn specialist(category: SpecialistCategory, model: impl Into<String>) -> Self {
        let (name, text) = match category {
            SpecialistCategory::Budget => ("Budget Vehicle Specialist", instructions::BUDGET),
            SpecialistCategory::Family => ("Family Vehicle Specialist", instructions::FAMILY),
            SpecialistCategory::Luxury => ("Luxury Vehicle Specialist", instructions::LUXURY),
            SpecialistCategory::Eco => ("Eco-Friendly Vehicle Specialist", instructions::ECO),
        };
        Self {
            name: name.to_string(),
            role: AgentRole::Specialist(category),
            instructions: text.to_string(),
            model: model.into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn category(&self) -> Option<SpecialistCategory> {
        match self.role {
            AgentRole::Manager => None,
            AgentRole::Specialist(c) => Some(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_profile() {
        let profile = AgentProfile::manager(DEFAULT_MODEL);
        assert!(profile.role.can_delegate());
        assert_eq!(profile.category(), None);
        assert!(profile.instructions.contains("optimized_multi_agent_query"));
    }

    #[test]
    fn test_specialist_profiles_are_distinct() {
        let profiles: Vec<_> = SpecialistCategory::ALL
            .into_iter()
            .map(|c| AgentProfile::specialist(c, DEFAULT_MODEL))
            .collect();

        for (profile, category) in profiles.iter().zip(SpecialistCategory::ALL) {
            assert_eq!(profile.category(), Some(category));
            assert!(!profile.role.can_delegate());
            assert!(profile.instructions.contains("inventory"));
        }
        assert_ne!(profiles[0].instructions, profiles[1].instructions);
    }

    #[test]
    fn test_with_model() {
        let profile = AgentProfile::specialist(SpecialistCategory::Eco, "a").with_model("b");
        assert_eq!(profile.model, "b");
    }
}
