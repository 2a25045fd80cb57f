//! Price comparison tool — one line per store, cheapest first.
//!
//! Collects each store's lowest price for the term and sorts ascending by
//! price, ties broken by store-name lexical order so the listing is stable
//! across runs.

use async_trait::async_trait;
use shopmate_core::catalog::{Catalog, SearchFilters};
use shopmate_core::error::ToolError;
use shopmate_core::tool::{Tool, ToolResult, ToolStatus};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub struct PriceComparisonTool {
    catalog: Arc<dyn Catalog>,
}

impl PriceComparisonTool {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for PriceComparisonTool {
    fn name(&self) -> &str {
        "price_comparison"
    }

    fn description(&self) -> &str {
        "Compare prices for a product across all stores, cheapest first."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "term": {
                    "type": "string",
                    "description": "Product term to compare, e.g. 'casual denim jacket'"
                }
            },
            "required": ["term"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let term = arguments["term"].as_str().unwrap_or("").trim().to_string();
        if term.is_empty() {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                "I couldn't determine which product you want to compare. Please specify the product name.",
            ));
        }

        // Lowest price per store.
        let mut per_store: BTreeMap<String, f64> = BTreeMap::new();
        for product in self.catalog.find(&term, &SearchFilters::default()) {
            per_store
                .entry(product.store.clone())
                .and_modify(|p| *p = p.min(product.price))
                .or_insert(product.price);
        }
        debug!(term, stores = per_store.len(), "price comparison");

        if per_store.is_empty() {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                format!("Sorry, I couldn't find any price comparisons for {term}."),
            ));
        }

        let mut ranked: Vec<(String, f64)> = per_store.into_iter().collect();
        ranked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut output = format!("Here are the prices for the {term} across stores:");
        for (store, price) in &ranked {
            output.push_str(&format!("\n- {store}: ${price:.2}"));
        }

        let data = serde_json::json!({
            "term": term,
            "prices": ranked
                .iter()
                .map(|(store, price)| serde_json::json!({"store": store, "price": price}))
                .collect::<Vec<_>>(),
        });
        Ok(ToolResult::ok(String::new(), output).with_data(data))
    }
}
