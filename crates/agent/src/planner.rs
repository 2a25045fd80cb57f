//! Plan construction — one declarative tool chain per intent.
//!
//! The planner is a pure function from (intent, entities) to an ordered
//! list of tool calls. It never executes anything and never consults the
//! catalog; argument values it cannot know yet (the found product's price
//! or id) are left absent and merged in by the orchestrator at run time.

use serde_json::{Map, Value, json};
use shopmate_core::entities::Entities;
use shopmate_core::intent::{Modifier, PrimaryIntent, QueryIntent};
use shopmate_tools::{
    DISCOUNT_CALCULATOR, PRICE_COMPARISON, PRODUCT_SEARCH, RETURN_POLICY, SHIPPING_ESTIMATOR,
};
use tracing::debug;

/// One step of a plan: a tool name, the arguments known at planning time,
/// and whether the step needs a product found by an earlier search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCall {
    pub tool: &'static str,
    pub arguments: Value,
    /// Skipped by the orchestrator when product_search found nothing.
    pub requires_product: bool,
}

impl PlannedCall {
    fn new(tool: &'static str, arguments: Value) -> Self {
        Self {
            tool,
            arguments,
            requires_product: false,
        }
    }

    fn needs_product(mut self) -> Self {
        self.requires_product = true;
        self
    }
}

/// Build the tool chain for a classified query.
pub fn build_plan(intent: &QueryIntent, entities: &Entities) -> Vec<PlannedCall> {
    let plan = match intent.primary {
        PrimaryIntent::Search => {
            let mut plan = vec![PlannedCall::new(
                PRODUCT_SEARCH,
                search_arguments(entities),
            )];
            if intent.has_modifier(Modifier::Discount) {
                plan.push(
                    PlannedCall::new(
                        DISCOUNT_CALCULATOR,
                        json!({ "code": entities.discount_code }),
                    )
                    .needs_product(),
                );
            }
            if intent.has_modifier(Modifier::Shipping) {
                let mut args = Map::new();
                if let Some(deadline) = entities.delivery_deadline {
                    args.insert("deadline".into(), json!(deadline.to_string()));
                }
                plan.push(
                    PlannedCall::new(SHIPPING_ESTIMATOR, Value::Object(args)).needs_product(),
                );
            }
            plan
        }
        PrimaryIntent::Compare => vec![PlannedCall::new(
            PRICE_COMPARISON,
            json!({ "term": entities.product_term }),
        )],
        PrimaryIntent::Return => {
            let store = entities
                .return_subject
                .as_deref()
                .or(entities.store.as_deref());
            vec![PlannedCall::new(RETURN_POLICY, json!({ "store": store }))]
        }
        // A discount-only query has no product to price; the extracted
        // price bound is the price to discount, when present.
        PrimaryIntent::Discount => vec![PlannedCall::new(
            DISCOUNT_CALCULATOR,
            json!({
                "code": entities.discount_code,
                "price": entities.max_price,
                "store": entities.store,
            }),
        )],
    };

    debug!(
        primary = ?intent.primary,
        steps = plan.len(),
        "plan built"
    );
    plan
}

fn search_arguments(entities: &Entities) -> Value {
    json!({
        "term": entities.product_term.as_deref().unwrap_or(""),
        "max_price": entities.max_price,
        "size": entities.size,
        "color": entities.color,
        "store": entities.store,
    })
}
