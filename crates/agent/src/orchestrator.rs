//! Sequential plan execution against the tool registry.
//!
//! Steps run strictly in plan order. When product_search finds a product,
//! its data is merged into the argument sets of later product-dependent
//! steps (price, product_id, store). When it finds nothing, those steps
//! are skipped entirely rather than run with fabricated inputs; the
//! completed prefix, including the miss itself, is still returned so the
//! composer can report the partial outcome.

use crate::planner::PlannedCall;
use serde_json::Value;
use shopmate_core::error::Result;
use shopmate_core::tool::{ToolCall, ToolRegistry, ToolResult};
use shopmate_tools::PRODUCT_SEARCH;
use tracing::{debug, warn};

pub struct Orchestrator {
    registry: ToolRegistry,
}

impl Orchestrator {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Execute a plan, one step at a time.
    ///
    /// Errors here mean wiring problems (a plan naming an unregistered
    /// tool); domain misses come back as non-`Ok` statuses in the results.
    pub async fn run(&self, plan: &[PlannedCall]) -> Result<Vec<ToolResult>> {
        let mut results = Vec::with_capacity(plan.len());
        let mut product: Option<Value> = None;

        for step in plan {
            if step.requires_product && product.is_none() {
                warn!(tool = step.tool, "skipping product-dependent step");
                continue;
            }

            let mut arguments = step.arguments.clone();
            if step.requires_product
                && let Some(found) = &product
            {
                merge_product(&mut arguments, found);
            }

            let call = ToolCall::new(step.tool, arguments);
            debug!(tool = step.tool, call_id = %call.id, "executing step");
            let result = self.registry.execute(&call).await?;

            if step.tool == PRODUCT_SEARCH {
                product = result
                    .data
                    .as_ref()
                    .and_then(|d| d.get("product"))
                    .cloned();
            }
            results.push(result);
        }

        Ok(results)
    }
}

/// Fill in the argument slots only the found product can supply. Values
/// already present in the plan are left alone.
fn merge_product(arguments: &mut Value, product: &Value) {
    let Some(map) = arguments.as_object_mut() else {
        return;
    };
    for (slot, source) in [("price", "price"), ("product_id", "id"), ("store", "store")] {
        if map.get(slot).is_none_or(Value::is_null)
            && let Some(value) = product.get(source)
        {
            map.insert(slot.to_string(), value.clone());
        }
    }
}
