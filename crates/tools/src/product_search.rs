//! Product search tool — finds the best catalog match for the extracted
//! filters.
//!
//! Filter order is fixed: term keywords, then size, color, store,
//! max_price (the catalog applies them). When several products survive the
//! filters, the cheapest wins, ties broken by store name. Finding nothing
//! is a `NotFound` result, never an error.

use async_trait::async_trait;
use shopmate_core::catalog::{Catalog, Product, SearchFilters};
use shopmate_core::error::ToolError;
use shopmate_core::tool::{Tool, ToolResult, ToolStatus};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

pub struct ProductSearchTool {
    catalog: Arc<dyn Catalog>,
}

impl ProductSearchTool {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ProductSearchTool {
    fn name(&self) -> &str {
        "product_search"
    }

    fn description(&self) -> &str {
        "Search the catalog for a product matching a term and optional size, color, store, and maximum price filters. Returns the cheapest match."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "term": {
                    "type": "string",
                    "description": "Product search term, e.g. 'floral skirt'"
                },
                "max_price": { "type": "number", "description": "Exclusive upper price bound" },
                "size": { "type": "string" },
                "color": { "type": "string" },
                "store": { "type": "string" }
            },
            "required": ["term"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let term = arguments["term"].as_str().unwrap_or("").to_string();
        let filters = SearchFilters {
            max_price: arguments["max_price"].as_f64(),
            size: arguments["size"].as_str().map(str::to_string),
            color: arguments["color"].as_str().map(str::to_string),
            store: arguments["store"].as_str().map(str::to_string),
        };

        let mut matches = self.catalog.find(&term, &filters);
        debug!(term, count = matches.len(), "product search");

        // Cheapest first, store name breaks ties.
        matches.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.store.cmp(&b.store))
        });

        match matches.first() {
            Some(product) => Ok(describe(product, matches.len())),
            None => Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                "I couldn't find any products matching your criteria.",
            )),
        }
    }
}

fn describe(product: &Product, match_count: usize) -> ToolResult {
    let output = format!(
        "I found a {} in size {} for ${:.2} at {}. It's in stock ({} available).",
        product.name, product.size, product.price, product.store, product.stock
    );
    ToolResult::ok(String::new(), output).with_data(serde_json::json!({
        "product": product,
        "match_count": match_count,
    }))
}
