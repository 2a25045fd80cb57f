//! Built-in domain tool implementations for Shopmate.
//!
//! The five tools cover the shopping domain: search the catalog, compare
//! prices across stores, estimate shipping, check return policies, and
//! apply discount codes. Every tool is a pure function over the injected
//! read-only catalog — no side effects, no shared mutation — so a plan can
//! execute them in any order the orchestrator chooses.

pub mod discount_calculator;
pub mod price_comparison;
pub mod product_search;
pub mod return_policy;
pub mod shipping_estimator;

use chrono::NaiveDate;
use shopmate_config::ShippingConfig;
use shopmate_core::catalog::Catalog;
use shopmate_core::tool::ToolRegistry;
use std::sync::Arc;

/// Canonical tool names, shared with the planner.
pub const PRODUCT_SEARCH: &str = "product_search";
pub const PRICE_COMPARISON: &str = "price_comparison";
pub const SHIPPING_ESTIMATOR: &str = "shipping_estimator";
pub const RETURN_POLICY: &str = "return_policy";
pub const DISCOUNT_CALCULATOR: &str = "discount_calculator";

/// Create a registry with all five domain tools bound to one catalog,
/// with shipping estimates anchored to today.
pub fn default_registry(catalog: Arc<dyn Catalog>, shipping: &ShippingConfig) -> ToolRegistry {
    registry_at(catalog, shipping, chrono::Utc::now().date_naive())
}

/// Like [`default_registry`], but shipping estimates are anchored to a
/// fixed reference date. Test seam.
pub fn registry_at(
    catalog: Arc<dyn Catalog>,
    shipping: &ShippingConfig,
    reference_date: NaiveDate,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(product_search::ProductSearchTool::new(
        catalog.clone(),
    )));
    registry.register(Box::new(price_comparison::PriceComparisonTool::new(
        catalog.clone(),
    )));
    registry.register(Box::new(
        shipping_estimator::ShippingEstimatorTool::new(shipping.clone())
            .with_reference_date(reference_date),
    ));
    registry.register(Box::new(return_policy::ReturnPolicyTool::new(
        catalog.clone(),
    )));
    registry.register(Box::new(discount_calculator::DiscountCalculatorTool::new(
        catalog,
    )));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopmate_catalog::MockCatalog;

    #[test]
    fn registry_has_all_five_tools() {
        let registry = default_registry(
            Arc::new(MockCatalog::demo()),
            &ShippingConfig::default(),
        );
        assert_eq!(
            registry.names(),
            vec![
                DISCOUNT_CALCULATOR,
                PRICE_COMPARISON,
                PRODUCT_SEARCH,
                RETURN_POLICY,
                SHIPPING_ESTIMATOR,
            ]
        );
    }
}
