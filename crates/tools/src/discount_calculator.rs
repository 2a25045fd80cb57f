//! Discount code application.
//!
//! Codes are per-store. When no store is named, the stores are scanned in
//! sorted name order and the first table containing the code wins, so a
//! store-less lookup is still deterministic. An unknown code is
//! `InvalidCode`, not an error.

use async_trait::async_trait;
use shopmate_core::catalog::Catalog;
use shopmate_core::error::ToolError;
use shopmate_core::tool::{Tool, ToolResult, ToolStatus};
use std::sync::Arc;
use tracing::debug;

pub struct DiscountCalculatorTool {
    catalog: Arc<dyn Catalog>,
}

impl DiscountCalculatorTool {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    fn lookup(&self, code: &str, store: Option<&str>) -> Option<(String, f64)> {
        match store {
            Some(store) => self
                .catalog
                .discount_table(store)
                .get(code)
                .map(|pct| (store.to_string(), *pct)),
            None => self.catalog.store_names().into_iter().find_map(|store| {
                self.catalog
                    .discount_table(&store)
                    .get(code)
                    .map(|pct| (store.clone(), *pct))
            }),
        }
    }
}

#[async_trait]
impl Tool for DiscountCalculatorTool {
    fn name(&self) -> &str {
        "discount_calculator"
    }

    fn description(&self) -> &str {
        "Apply a discount code to a price and compute the final amount."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "price": { "type": "number", "description": "Price before discount" },
                "code": { "type": "string", "description": "Discount code, e.g. 'SAVE10'" },
                "store": { "type": "string", "description": "Store the code belongs to" }
            },
            "required": ["price", "code"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let code = arguments["code"].as_str().unwrap_or("").trim().to_string();
        if code.is_empty() {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::InvalidCode,
                "I couldn't tell which discount code you want to apply.",
            ));
        }
        let Some(price) = arguments["price"].as_f64() else {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                "I couldn't determine the price to apply the discount to.",
            ));
        };
        let store = arguments["store"].as_str();

        match self.lookup(&code, store) {
            Some((store, pct)) => {
                // Round to cents once, at the end.
                let final_price = ((price * (1.0 - pct)) * 100.0).round() / 100.0;
                debug!(code, store, pct, final_price, "discount applied");
                let output = format!(
                    "With discount code '{code}', the final price would be ${final_price:.2}."
                );
                Ok(ToolResult::ok(String::new(), output).with_data(serde_json::json!({
                    "code": code,
                    "store": store,
                    "percentage": pct,
                    "original_price": price,
                    "final_price": final_price,
                })))
            }
            None => Ok(ToolResult::failed(
                String::new(),
                ToolStatus::InvalidCode,
                format!("The discount code '{code}' is not valid."),
            )),
        }
    }
}
