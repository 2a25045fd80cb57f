//! Catalog trait — the read-only store collaborator.
//!
//! The catalog owns the product data, the per-store return policies, and
//! the per-store discount code tables. The core never mutates it; tools
//! receive it as an explicitly injected `Arc<dyn Catalog>` so test and
//! production datasets can coexist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One catalog product. Read-only; owned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub color: String,
    pub size: String,
    pub store: String,
    pub stock: u32,
    #[serde(default)]
    pub description: String,
}

/// A store's return policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnPolicy {
    pub store: String,
    pub days_allowed: u32,
    pub free_returns: bool,
    pub conditions: String,
}

/// Filters applied by [`Catalog::find`], after term matching, in this
/// order: size, color, store, max_price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// Read-only lookup service over the mock store data.
///
/// Implementations must be safe for concurrent reads; the pipeline itself
/// is single-pass and never writes.
pub trait Catalog: Send + Sync {
    /// Products whose name/description/color match the term's keywords,
    /// narrowed by the filters. An empty result is a normal outcome.
    fn find(&self, term: &str, filters: &SearchFilters) -> Vec<Product>;

    /// The return policy for a store, if the store is known.
    fn policy(&self, store: &str) -> Option<ReturnPolicy>;

    /// The store's discount table, code → fractional percentage
    /// (0.10 = 10% off). Empty for unknown stores.
    fn discount_table(&self, store: &str) -> BTreeMap<String, f64>;

    /// All known store names, sorted.
    fn store_names(&self) -> Vec<String>;
}
