//! Query intent — the classified purpose of a query.
//!
//! Each query gets exactly one primary intent. Secondary needs (apply a
//! discount, check shipping) attach to the primary as modifiers rather than
//! competing with it, so "find a skirt under $140 with code SAVE10 by
//! Monday" is one combined Search plan, not three queries.

use serde::{Deserialize, Serialize};

/// The primary purpose of a query. Drives tool-chain selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryIntent {
    /// Find a product matching the extracted filters.
    Search,
    /// Compare prices for a product across stores.
    Compare,
    /// Look up a store's return policy.
    Return,
    /// Apply a discount code to an entity-supplied price, with no search.
    Discount,
}

/// A secondary need attached to a primary intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Discount,
    Shipping,
}

/// Classified intent: one primary plus zero or more modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub primary: PrimaryIntent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

impl QueryIntent {
    pub fn new(primary: PrimaryIntent) -> Self {
        Self {
            primary,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// A combined query: a primary with at least one modifier.
    pub fn is_combined(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_search_is_not_combined() {
        let intent = QueryIntent::new(PrimaryIntent::Search);
        assert!(!intent.is_combined());
        assert!(!intent.has_modifier(Modifier::Discount));
    }

    #[test]
    fn modifiers_deduplicate() {
        let intent = QueryIntent::new(PrimaryIntent::Search)
            .with_modifier(Modifier::Discount)
            .with_modifier(Modifier::Discount)
            .with_modifier(Modifier::Shipping);
        assert_eq!(intent.modifiers.len(), 2);
        assert!(intent.is_combined());
    }
}
