//! Intent classification — first-match-wins cue priority.
//!
//! The rule order below is the contract, not an implementation detail:
//!
//! 1. Comparison cues → `Compare`
//! 2. Return/policy cues → `Return`
//! 3. Discount code with no product term → `Discount` (a bare price may
//!    ride along as the amount to discount)
//! 4. Otherwise → `Search`, collecting a `Shipping` modifier (deadline or
//!    shipping cue alongside product cues) and a `Discount` modifier (code
//!    present)
//!
//! "compare" beats "search" even when a price filter is present; a lone
//! discount code never becomes a search. Tests assert the precedence, not
//! just individual outcomes.

use once_cell::sync::Lazy;
use regex::Regex;
use shopmate_core::entities::Entities;
use shopmate_core::intent::{Modifier, PrimaryIntent, QueryIntent};
use tracing::debug;

// Order matters — more specific intents first.
static COMPARISON_CUES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)better deals?").unwrap(),
        Regex::new(r"(?i)\bcompare\b").unwrap(),
        Regex::new(r"(?i)\bcheaper\b").unwrap(),
        Regex::new(r"(?i)best price").unwrap(),
        Regex::new(r"(?i)lowest price").unwrap(),
        Regex::new(r"(?i)price difference").unwrap(),
        Regex::new(r"(?i)price comparison").unwrap(),
    ]
});

static RETURN_CUES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)return policy").unwrap(),
        Regex::new(r"(?i)can i return").unwrap(),
        Regex::new(r"(?i)\breturns?\b").unwrap(),
        Regex::new(r"(?i)\brefund\b").unwrap(),
        Regex::new(r"(?i)\bexchange\b").unwrap(),
    ]
});

static SHIPPING_CUES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\bdeliver(?:ed|y)?\b").unwrap(),
        Regex::new(r"(?i)\bshipping\b").unwrap(),
        Regex::new(r"(?i)\bship\b").unwrap(),
        Regex::new(r"(?i)\barrive\b").unwrap(),
    ]
});

/// Deterministic, priority-ordered intent classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Assign the primary intent and collect modifiers.
    pub fn classify(&self, entities: &Entities, text: &str) -> QueryIntent {
        // "cheaper than $X" is a price bound, not a comparison request;
        // strip it before cue matching so rule 1 does not swallow rule 4.
        let comparison_text = strip_price_bound_phrases(text);

        let intent = if matches(&COMPARISON_CUES, &comparison_text) {
            QueryIntent::new(PrimaryIntent::Compare)
        } else if matches(&RETURN_CUES, text) {
            QueryIntent::new(PrimaryIntent::Return)
        } else if entities.discount_code.is_some() && entities.product_term.is_none() {
            // A price without a product term is the amount to discount,
            // not a search filter.
            QueryIntent::new(PrimaryIntent::Discount)
        } else {
            let mut intent = QueryIntent::new(PrimaryIntent::Search);
            if entities.discount_code.is_some() {
                intent = intent.with_modifier(Modifier::Discount);
            }
            let shipping_cue =
                entities.has_product_cues() && matches(&SHIPPING_CUES, text);
            if entities.delivery_deadline.is_some() || shipping_cue {
                intent = intent.with_modifier(Modifier::Shipping);
            }
            intent
        };

        debug!(?intent, "classified query");
        intent
    }
}

fn matches(cues: &[Regex], text: &str) -> bool {
    cues.iter().any(|re| re.is_match(text))
}

fn strip_price_bound_phrases(text: &str) -> String {
    static PRICE_BOUND: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)cheaper than\s*\$\d+\.?\d*").unwrap());
    PRICE_BOUND.replace_all(text, "").into_owned()
}
