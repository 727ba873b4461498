//! Vehicle toolbox, the concrete implementation of [`ToolExecutorPort`].
//!
//! Routes agent tool calls to the [`FilterEngine`] searches and, for the
//! manager, to the [`SpecialistOrchestrator`].
//!
//! ```text
//! execute(call)
//!   ├─ search_vehicles_*            → FilterEngine   (JSON array of records)
//!   ├─ <category>_specialist        → consult()      (one specialist)
//!   └─ optimized_multi_agent_query  → dispatch()     (every matching specialist)
//! ```
//!
//! Failures never escape as `Err`: bad arguments become `INVALID_ARGUMENT`,
//! unknown names `NOT_FOUND`, and the model reads either as tool output.

use advisor_application::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use advisor_application::ports::tool_executor::ToolExecutorPort;
use advisor_application::{FilterEngine, SpecialistOrchestrator};
use advisor_domain::tool::capabilities::{
    self, MULTI_AGENT_QUERY, SEARCH_BY_BUDGET, SEARCH_BY_FEATURES, SEARCH_BY_FUEL_TYPE,
    SEARCH_BY_TYPE, SEARCH_GENERAL,
};
use advisor_domain::tool::{ToolCall, ToolError, ToolResult, ToolSpec};
use advisor_domain::{SpecialistCategory, SpecialistResult, VehicleRecord};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Reply for a multi-agent query that no specialist keyword matched.
pub const NO_SPECIALIST_MATCH: &str = "No specialist matched this request. \
    Answer it directly using the inventory search tools.";

pub struct VehicleToolbox {
    spec: ToolSpec,
    filters: Arc<FilterEngine>,
    orchestrator: Option<Arc<SpecialistOrchestrator>>,
    logger: Arc<dyn ConversationLogger>,
}

impl VehicleToolbox {
    /// Inventory searches only. This is what specialists get.
    pub fn inventory(filters: Arc<FilterEngine>) -> Self {
        Self {
            spec: capabilities::inventory_tools(),
            filters,
            orchestrator: None,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Inventory searches plus the specialist and multi-agent tools.
    pub fn manager(filters: Arc<FilterEngine>, orchestrator: Arc<SpecialistOrchestrator>) -> Self {
        Self {
            spec: capabilities::manager_tools(),
            filters,
            orchestrator: Some(orchestrator),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let name = call.tool_name.as_str();
        match name {
            SEARCH_BY_BUDGET => {
                let max = call.require_f64("max_budget").map_err(ToolError::invalid_argument)?;
                let min = call.get_f64("min_budget").unwrap_or(0.0);
                if min > max {
                    return Err(ToolError::invalid_argument(format!(
                        "min_budget ({}) is greater than max_budget ({})",
                        min, max
                    )));
                }
                vehicles_result(name, self.filters.by_budget(min, max).await)
            }
            SEARCH_BY_TYPE => {
                let types = call
                    .require_string_list("vehicle_types")
                    .map_err(ToolError::invalid_argument)?;
                vehicles_result(name, self.filters.by_type(&types).await)
            }
            SEARCH_BY_FEATURES => {
                let features = call
                    .require_string_list("required_features")
                    .map_err(ToolError::invalid_argument)?;
                vehicles_result(name, self.filters.by_features(&features).await)
            }
            SEARCH_BY_FUEL_TYPE => {
                let fuels = call
                    .require_string_list("fuel_types")
                    .map_err(ToolError::invalid_argument)?;
                vehicles_result(name, self.filters.by_fuel_type(&fuels).await)
            }
            SEARCH_GENERAL => {
                let query = call.require_string("query").map_err(ToolError::invalid_argument)?;
                vehicles_result(name, self.filters.general(query).await)
            }
            MULTI_AGENT_QUERY => {
                let query = call
                    .require_string("user_query")
                    .map_err(ToolError::invalid_argument)?;
                let results = self.orchestrator()?.dispatch(query).await;
                if results.is_empty() {
                    return Ok(ToolResult::success(name, NO_SPECIALIST_MATCH));
                }
                let rendered: Vec<String> = results.iter().map(SpecialistResult::render).collect();
                Ok(ToolResult::success(name, rendered.join("\n\n")).with_match_count(results.len()))
            }
            _ => match SpecialistCategory::from_tool_name(name) {
                Some(category) => {
                    let input = call.require_string("input").map_err(ToolError::invalid_argument)?;
                    let result = self.orchestrator()?.consult(category, input).await;
                    if result.is_success() {
                        Ok(ToolResult::success(name, result.content))
                    } else {
                        Err(ToolError::execution_failed(result.render()))
                    }
                }
                None => Err(ToolError::not_found(name)),
            },
        }
    }

    fn orchestrator(&self) -> Result<&SpecialistOrchestrator, ToolError> {
        self.orchestrator
            .as_deref()
            .ok_or_else(|| ToolError::execution_failed("specialists are not available here"))
    }
}

fn vehicles_result(tool: &str, vehicles: Vec<VehicleRecord>) -> Result<ToolResult, ToolError> {
    let output = serde_json::to_string(&vehicles)
        .map_err(|e| ToolError::execution_failed(format!("could not encode vehicles: {}", e)))?;
    Ok(ToolResult::success(tool, output).with_match_count(vehicles.len()))
}

#[async_trait]
impl ToolExecutorPort for VehicleToolbox {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();

        let result = if !self.spec.contains(&call.tool_name) {
            ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name))
        } else {
            self.dispatch(call)
                .await
                .unwrap_or_else(|e| ToolResult::failure(&call.tool_name, e))
        };
        let result = result.with_duration(started.elapsed().as_millis() as u64);

        debug!(
            tool = %call.tool_name,
            success = result.is_success(),
            matches = ?result.match_count,
            duration_ms = result.duration_ms,
            "Tool executed"
        );
        self.logger.log(ConversationEvent::new(
            "tool_call",
            json!({
                "tool": call.tool_name,
                "arguments": call.arguments,
                "success": result.is_success(),
                "match_count": result.match_count,
                "duration_ms": result.duration_ms,
                "error": result.error().map(|e| e.to_string()),
            }),
        ));

        result
    }
}
