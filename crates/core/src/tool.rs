//! Tool trait — the abstraction over shopping-domain capabilities.
//!
//! Tools are pure lookups/computations over the injected catalog: search
//! for a product, compare prices, estimate shipping, check a return
//! policy, apply a discount code. Each tool call is independent and
//! side-effect-free.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A request to execute a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call ID, for tracing one call through the plan.
    pub id: String,

    /// Name of the tool to execute.
    pub name: String,

    /// Arguments as a JSON value.
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            arguments,
        }
    }
}

/// Domain outcome of a tool execution.
///
/// The non-`Ok` statuses are first-class results, not errors: the tool ran
/// fine and is reporting that the domain had nothing to offer. The
/// orchestrator decides whether they halt dependent steps; the composer
/// turns them into explanatory fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Ok,
    /// No matching product, store, or policy.
    NotFound,
    /// Discount code unknown to the store's code table.
    InvalidCode,
    /// Shipping cannot meet the requested deadline.
    Infeasible,
}

/// The result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The call ID this result is for.
    pub call_id: String,

    /// Domain outcome.
    pub status: ToolStatus,

    /// User-facing phrase fragment for this result. On a non-`Ok` status
    /// this is the explanation the composer substitutes in place.
    pub output: String,

    /// Optional structured payload for downstream plan steps (e.g. the
    /// found product the shipping estimator needs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    pub fn ok(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            status: ToolStatus::Ok,
            output: output.into(),
            data: None,
        }
    }

    pub fn failed(
        call_id: impl Into<String>,
        status: ToolStatus,
        output: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            status,
            output: output.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == ToolStatus::Ok
    }
}

/// Description of a tool, for introspection and the CLI's tool listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// The core Tool trait.
///
/// Each domain tool (product_search, price_comparison, shipping_estimator,
/// return_policy, discount_calculator) implements this trait. Tools are
/// registered in the ToolRegistry and selected by the per-intent plan.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "product_search").
    fn name(&self) -> &str;

    /// A description of what this tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, arguments: serde_json::Value)
    -> std::result::Result<ToolResult, ToolError>;

    /// Convert this tool into a ToolDefinition.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// A registry of available tools.
///
/// The orchestrator uses this to look up and execute the tools named by a
/// plan. Registration order does not matter; execution order is the
/// plan's.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Get all tool definitions.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.tools.values().map(|t| t.to_definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call.
    pub async fn execute(&self, call: &ToolCall) -> std::result::Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        let mut result = tool.execute(call.arguments.clone()).await?;
        result.call_id = call.id.clone();
        Ok(result)
    }

    /// List all registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
