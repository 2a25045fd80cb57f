//! Extracted query entities — the structured record the pipeline runs on.
//!
//! Every slot is optional. A slot the extractor could not fill stays `None`;
//! it is never defaulted to something that looks like a real value (a
//! missing price must not become 0).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named slots extracted from one query. Created once per request,
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    /// The product noun phrase ("floral skirt"). Best-effort; may be
    /// imprecise on loosely-bounded queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_term: Option<String>,

    /// Exclusive-ish upper price bound from phrases like "under $140".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    /// Size token, verbatim ("S", "8") — clothing and shoe scales are not
    /// normalized against each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// A store name matched against the catalog's known store set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,

    /// Delivery deadline resolved to a concrete date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<NaiveDate>,

    /// What the user wants to return — the mentioned store, when return
    /// cues are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_subject: Option<String>,
}

impl Entities {
    /// True when no slot was filled at all.
    pub fn is_empty(&self) -> bool {
        self.product_term.is_none()
            && self.max_price.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.store.is_none()
            && self.discount_code.is_none()
            && self.delivery_deadline.is_none()
            && self.return_subject.is_none()
    }

    /// True when the query carries product-search cues (a product term or a
    /// price bound). The classifier uses this to gate the shipping
    /// modifier: a shipping cue with nothing to ship is not a shipping
    /// request.
    pub fn has_product_cues(&self) -> bool {
        self.product_term.is_some() || self.max_price.is_some()
    }
}
