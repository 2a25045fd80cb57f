//! Return policy lookup for a named store.

use async_trait::async_trait;
use shopmate_core::catalog::{Catalog, ReturnPolicy};
use shopmate_core::error::ToolError;
use shopmate_core::tool::{Tool, ToolResult, ToolStatus};
use std::sync::Arc;
use tracing::debug;

pub struct ReturnPolicyTool {
    catalog: Arc<dyn Catalog>,
}

impl ReturnPolicyTool {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ReturnPolicyTool {
    fn name(&self) -> &str {
        "return_policy"
    }

    fn description(&self) -> &str {
        "Look up the return policy for a store: return window, whether returns are free, and any conditions."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "store": {
                    "type": "string",
                    "description": "Store name, e.g. 'StoreB'"
                }
            },
            "required": ["store"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let store = arguments["store"].as_str().unwrap_or("").trim();
        if store.is_empty() {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                "I couldn't tell which store you want return policy information for.",
            ));
        }

        match self.catalog.policy(store) {
            Some(policy) => {
                debug!(store, days = policy.days_allowed, "return policy found");
                let data = serde_json::to_value(&policy)
                    .map_err(|e| ToolError::ExecutionFailed {
                        tool_name: "return_policy".to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(ToolResult::ok(String::new(), describe(&policy)).with_data(data))
            }
            None => Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                format!("Sorry, I couldn't find return policy information for {store}."),
            )),
        }
    }
}

fn describe(policy: &ReturnPolicy) -> String {
    let fee_line = if policy.free_returns {
        "Returns are free."
    } else {
        "Return shipping fee applies."
    };
    let mut output = format!(
        "{} accepts returns within {} days. {}",
        policy.store, policy.days_allowed, fee_line
    );
    if !policy.conditions.is_empty() {
        output.push(' ');
        output.push_str(&policy.conditions);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopmate_catalog::MockCatalog;

    fn tool() -> ReturnPolicyTool {
        ReturnPolicyTool::new(Arc::new(MockCatalog::demo()))
    }

    #[tokio::test]
    async fn known_store_policy_sentence() {
        let result = tool()
            .execute(serde_json::json!({"store": "StoreB"}))
            .await
            .unwrap();

        assert!(result.is_ok());
        assert!(result.output.contains("StoreB accepts returns within 14 days"));
        // Conditions appear exactly once.
        assert_eq!(result.output.matches("postmarked").count(), 1);
        let data = result.data.unwrap();
        assert_eq!(data["days_allowed"], 14);
    }

    #[tokio::test]
    async fn free_returns_phrasing() {
        let result = tool()
            .execute(serde_json::json!({"store": "StoreA"}))
            .await
            .unwrap();
        assert!(result.output.contains("Returns are free."));
    }

    #[tokio::test]
    async fn unknown_store_is_not_found() {
        let result = tool()
            .execute(serde_json::json!({"store": "StoreX"}))
            .await
            .unwrap();

        assert_eq!(result.status, ToolStatus::NotFound);
        assert!(result.output.contains("StoreX"));
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn missing_store_is_not_found() {
        let result = tool().execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.status, ToolStatus::NotFound);
    }
}
