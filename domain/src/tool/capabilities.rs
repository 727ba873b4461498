//! Vehicle capability table
//!
//! The fixed set of tools exposed to agents. Specialists only see the
//! inventory searches; the manager additionally sees the specialist tools and
//! the multi-agent query, so a specialist can never start another fan-out.

use super::entities::{ParamType, ToolDefinition, ToolParameter, ToolSpec};
use crate::agent::AgentRole;
use crate::intent::SpecialistCategory;

pub const SEARCH_BY_BUDGET: &str = "search_vehicles_by_budget";
pub const SEARCH_BY_TYPE: &str = "search_vehicles_by_type";
pub const SEARCH_BY_FEATURES: &str = "search_vehicles_by_features";
pub const SEARCH_BY_FUEL_TYPE: &str = "search_vehicles_by_fuel_type";
pub const SEARCH_GENERAL: &str = "search_vehicles";
pub const MULTI_AGENT_QUERY: &str = "optimized_multi_agent_query";

pub fn search_by_budget() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_BY_BUDGET,
        "Find in-stock vehicles whose price lies within a budget range.",
    )
    .with_parameter(
        ToolParameter::new("max_budget", "Maximum price in US dollars", true)
            .with_type(ParamType::Number),
    )
    .with_parameter(
        ToolParameter::new("min_budget", "Minimum price in US dollars (default 0)", false)
            .with_type(ParamType::Number),
    )
}

pub fn search_by_type() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_BY_TYPE,
        "Find in-stock vehicles by body type or category (e.g. SUV, Sedan, family, luxury).",
    )
    .with_parameter(
        ToolParameter::new("vehicle_types", "Vehicle types or categories to match", true)
            .with_type(ParamType::StringArray),
    )
}

pub fn search_by_features() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_BY_FEATURES,
        "Find in-stock vehicles that have any of the given features.",
    )
    .with_parameter(
        ToolParameter::new(
            "required_features",
            "Features to look for (e.g. \"leather seats\", \"autopilot\")",
            true,
        )
        .with_type(ParamType::StringArray),
    )
}

pub fn search_by_fuel_type() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_BY_FUEL_TYPE,
        "Find in-stock vehicles by fuel type (Electric, Hybrid, Gasoline, Diesel).",
    )
    .with_parameter(
        ToolParameter::new("fuel_types", "Fuel types to match", true)
            .with_type(ParamType::StringArray),
    )
}

pub fn search_general() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_GENERAL,
        "Search in-stock vehicles with free text. Understands colors, price limits \
         (\"under $30k\"), years, makes, models, fuel, drivetrain, seats and safety stars.",
    )
    .with_parameter(ToolParameter::new("query", "Free-text search", true))
}

pub fn multi_agent_query() -> ToolDefinition {
    ToolDefinition::new(
        MULTI_AGENT_QUERY,
        "Consult every relevant specialist (budget, family, luxury, eco) in parallel \
         and return their answers.",
    )
    .with_parameter(ToolParameter::new("user_query", "The customer's request", true))
}

pub fn specialist(category: SpecialistCategory) -> ToolDefinition {
    let description = match category {
        SpecialistCategory::Budget => "Ask the budget specialist for value-focused recommendations.",
        SpecialistCategory::Family => {
            "Ask the family specialist for safety and space focused recommendations."
        }
        SpecialistCategory::Luxury => {
            "Ask the luxury specialist for premium and performance recommendations."
        }
        SpecialistCategory::Eco => {
            "Ask the eco specialist for electric, hybrid and efficient recommendations."
        }
    };
    ToolDefinition::new(category.tool_name(), description)
        .with_parameter(ToolParameter::new("input", "The request for the specialist", true))
}

/// Tools every agent can use
pub fn inventory_tools() -> ToolSpec {
    ToolSpec::new()
        .register(search_by_budget())
        .register(search_by_type())
        .register(search_by_features())
        .register(search_by_fuel_type())
        .register(search_general())
}

/// Inventory tools plus delegation tools
pub fn manager_tools() -> ToolSpec {
    SpecialistCategory::ALL
        .into_iter()
        .fold(inventory_tools(), |spec, c| spec.register(specialist(c)))
        .register(multi_agent_query())
}

pub fn tools_for(role: AgentRole) -> ToolSpec {
    if role.can_delegate() {
        manager_tools()
    } else {
        inventory_tools()
    }
}
