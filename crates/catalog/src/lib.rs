//! Mock store catalog — the read-only lookup service behind the tools.
//!
//! Ships with a built-in demo dataset (three stores, six products, two
//! discount codes) and can load an arbitrary dataset from a TOML document,
//! so tests and deployments can swap catalogs without touching the
//! pipeline.
//!
//! Term matching is keyword-based: the query term is split into keywords
//! (stop words dropped) and a product matches when every keyword appears in
//! its name, description, or color. Filters are then applied in a fixed
//! order: size, color, store, max_price.

use serde::Deserialize;
use shopmate_core::catalog::{Catalog, Product, ReturnPolicy, SearchFilters};
use shopmate_core::error::CatalogError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Words ignored when splitting a search term into keywords.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "in", "with", "and", "or", "for", "to", "under", "some",
];

/// In-memory catalog backed by plain vectors and maps.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    policies: BTreeMap<String, ReturnPolicy>,
    discount_tables: BTreeMap<String, BTreeMap<String, f64>>,
}

/// TOML document shape for file-loaded catalogs.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    policies: Vec<ReturnPolicy>,
    /// store name → (code → fractional discount)
    #[serde(default)]
    discounts: BTreeMap<String, BTreeMap<String, f64>>,
}

impl MockCatalog {
    /// The built-in demo dataset.
    pub fn demo() -> Self {
        let products = vec![
            product("1", "Floral Summer Skirt", 35.99, "Floral", "S", "StoreA", 10,
                "Beautiful floral pattern"),
            product("2", "White Athletic Sneakers", 65.99, "White", "8", "StoreB", 5,
                "Classic white sneakers"),
            product("3", "Casual Denim Jacket", 80.0, "Blue", "M", "StoreA", 8,
                "Casual denim jacket"),
            product("4", "Cocktail Dress", 89.99, "Black", "S", "StoreB", 15,
                "Elegant cocktail dress"),
            product("5", "Casual Denim Jacket", 75.99, "Blue", "M", "StoreB", 6,
                "Casual denim jacket"),
            product("6", "Casual Denim Jacket", 82.99, "Blue", "M", "StoreC", 4,
                "Casual denim jacket"),
        ];

        let policies = [
            policy("StoreA", 30, true, "Items must be unworn with tags"),
            policy("StoreB", 14, false, "Items must be postmarked within the 14-day window"),
            policy("StoreC", 21, true, "Free returns within 21 days"),
        ];

        let codes: BTreeMap<String, f64> =
            [("SAVE10".to_string(), 0.10), ("SUMMER20".to_string(), 0.20)].into();

        let discount_tables = policies
            .iter()
            .map(|p| (p.store.clone(), codes.clone()))
            .collect();

        Self {
            products,
            policies: policies.into_iter().map(|p| (p.store.clone(), p)).collect(),
            discount_tables,
        }
    }

    /// Build a catalog from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            toml::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self {
            products: doc.products,
            policies: doc
                .policies
                .into_iter()
                .map(|p| (p.store.clone(), p))
                .collect(),
            discount_tables: doc.discounts,
        })
    }

    /// Load a catalog from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), products = catalog.products.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Catalog for MockCatalog {
    fn find(&self, term: &str, filters: &SearchFilters) -> Vec<Product> {
        let keywords: Vec<String> = term
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .filter(|w| !STOP_WORDS.contains(&w.as_str()))
            .collect();
        debug!(?keywords, ?filters, "catalog search");

        self.products
            .iter()
            .filter(|p| {
                let text =
                    format!("{} {} {}", p.name, p.description, p.color).to_lowercase();
                // Every keyword must appear somewhere in the product text.
                // An empty keyword list matches nothing, not everything.
                !keywords.is_empty() && keywords.iter().all(|k| text.contains(k.as_str()))
            })
            .filter(|p| match &filters.size {
                Some(size) => p.size.eq_ignore_ascii_case(size),
                None => true,
            })
            .filter(|p| match &filters.color {
                Some(color) => p.color.eq_ignore_ascii_case(color),
                None => true,
            })
            .filter(|p| match &filters.store {
                Some(store) => p.store.eq_ignore_ascii_case(store),
                None => true,
            })
            .filter(|p| match filters.max_price {
                // "under $X" is an exclusive bound.
                Some(max) => p.price < max,
                None => true,
            })
            .cloned()
            .collect()
    }

    fn policy(&self, store: &str) -> Option<ReturnPolicy> {
        self.policies.get(store).cloned()
    }

    fn discount_table(&self, store: &str) -> BTreeMap<String, f64> {
        self.discount_tables.get(store).cloned().unwrap_or_default()
    }

    fn store_names(&self) -> Vec<String> {
        self.policies.keys().cloned().collect()
    }
}

fn product(
    id: &str,
    name: &str,
    price: f64,
    color: &str,
    size: &str,
    store: &str,
    stock: u32,
    description: &str,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        price,
        color: color.into(),
        size: size.into(),
        store: store.into(),
        stock,
        description: description.into(),
    }
}

fn policy(store: &str, days_allowed: u32, free_returns: bool, conditions: &str) -> ReturnPolicy {
    ReturnPolicy {
        store: store.into(),
        days_allowed,
        free_returns,
        conditions: conditions.into(),
    }
}
