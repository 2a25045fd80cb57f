//! Shipping estimator — deterministic delivery estimates.
//!
//! The transit time for a product is derived from a stable hash of its id,
//! clamped into the configured `[min_days, max_days]` window, so the same
//! product always ships in the same number of days. When the caller names a
//! deadline earlier than the earliest feasible date the result is
//! `Infeasible` rather than an error.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use shopmate_config::ShippingConfig;
use shopmate_core::error::ToolError;
use shopmate_core::tool::{Tool, ToolResult, ToolStatus};
use tracing::debug;

pub struct ShippingEstimatorTool {
    config: ShippingConfig,
    reference_date: NaiveDate,
}

impl ShippingEstimatorTool {
    pub fn new(config: ShippingConfig) -> Self {
        Self {
            config,
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Pin the "today" used for estimates. Test seam.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    fn transit_days(&self, product_id: &str) -> u32 {
        let span = self.config.max_days - self.config.min_days + 1;
        self.config.min_days + stable_hash(product_id) % span
    }
}

// Same fold everywhere, so estimates never drift between runs.
fn stable_hash(input: &str) -> u32 {
    input
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
}

#[async_trait]
impl Tool for ShippingEstimatorTool {
    fn name(&self) -> &str {
        "shipping_estimator"
    }

    fn description(&self) -> &str {
        "Estimate the delivery date and shipping cost for a product, optionally checking a requested deadline."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "product_id": {
                    "type": "string",
                    "description": "Catalog id of the product to ship"
                },
                "store": {
                    "type": "string",
                    "description": "Store the product ships from"
                },
                "deadline": {
                    "type": "string",
                    "description": "Requested delivery date, ISO 8601 (YYYY-MM-DD)"
                }
            },
            "required": ["product_id"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let product_id = arguments["product_id"].as_str().unwrap_or("").trim();
        if product_id.is_empty() {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::NotFound,
                "I couldn't determine which product to estimate shipping for.",
            ));
        }

        let days = self.transit_days(product_id);
        let earliest = self.reference_date + chrono::Days::new(u64::from(days));
        debug!(product_id, days, %earliest, "shipping estimate");

        let data = serde_json::json!({
            "product_id": product_id,
            "estimated_days": days,
            "earliest_date": earliest.to_string(),
            "cost": self.config.base_cost,
        });

        if let Some(deadline) = arguments["deadline"]
            .as_str()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            && deadline < earliest
        {
            return Ok(ToolResult::failed(
                String::new(),
                ToolStatus::Infeasible,
                format!(
                    "Sorry, we cannot guarantee delivery by your requested date. Estimated delivery would be {}.",
                    earliest.format("%A, %B %d")
                ),
            )
            .with_data(data));
        }

        let output = format!(
            "It can be delivered by {} (estimated {days} days) for ${:.2} shipping.",
            earliest.format("%A, %B %d"),
            self.config.base_cost
        );
        Ok(ToolResult::ok(String::new(), output).with_data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> ShippingEstimatorTool {
        // 2024-06-12 is a Wednesday.
        ShippingEstimatorTool::new(ShippingConfig::default())
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
    }

    #[tokio::test]
    async fn estimate_is_deterministic() {
        let a = tool()
            .execute(serde_json::json!({"product_id": "p1"}))
            .await
            .unwrap();
        let b = tool()
            .execute(serde_json::json!({"product_id": "p1"}))
            .await
            .unwrap();
        assert_eq!(a.output, b.output);
        assert!(a.is_ok());
    }

    #[tokio::test]
    async fn days_stay_in_configured_window() {
        for id in ["p1", "p2", "p3", "p4", "p5", "p6"] {
            let result = tool()
                .execute(serde_json::json!({"product_id": id}))
                .await
                .unwrap();
            let days = result.data.unwrap()["estimated_days"].as_u64().unwrap();
            assert!((5..=7u64).contains(&days), "{id}: {days} days");
        }
    }

    #[tokio::test]
    async fn deadline_before_earliest_is_infeasible() {
        let result = tool()
            .execute(serde_json::json!({
                "product_id": "p1",
                "deadline": "2024-06-13"
            }))
            .await
            .unwrap();

        assert_eq!(result.status, ToolStatus::Infeasible);
        assert!(result.output.contains("cannot guarantee delivery"));
        // The earliest date is still reported so the composer can relay it.
        assert!(result.data.unwrap()["earliest_date"].is_string());
    }

    #[tokio::test]
    async fn generous_deadline_is_fine() {
        let result = tool()
            .execute(serde_json::json!({
                "product_id": "p1",
                "deadline": "2024-07-01"
            }))
            .await
            .unwrap();

        assert!(result.is_ok());
        assert!(result.output.contains("can be delivered by"));
        assert!(result.output.contains("$5.99"));
    }

    #[tokio::test]
    async fn unparseable_deadline_is_ignored() {
        let result = tool()
            .execute(serde_json::json!({
                "product_id": "p1",
                "deadline": "next monday"
            }))
            .await
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let result = tool().execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.status, ToolStatus::NotFound);
    }
}
