//! The Shopmate query pipeline.
//!
//! Every query runs the same single-pass sequence:
//!
//! 1. **Extract** — pattern tables fill the optional entity slots
//! 2. **Classify** — cue priority picks one primary intent plus modifiers
//! 3. **Plan** — the intent selects a declarative tool chain
//! 4. **Execute** — strictly sequential, product data fed forward
//! 5. **Compose** — result fragments joined into one reply
//!
//! No stage loops back, no state survives between queries: the same text
//! against the same catalog always produces the byte-identical reply.

pub mod composer;
pub mod orchestrator;
pub mod planner;

pub use composer::CANNOT_UNDERSTAND;
pub use orchestrator::Orchestrator;
pub use planner::{PlannedCall, build_plan};

use chrono::NaiveDate;
use shopmate_config::{AppConfig, ShippingConfig};
use shopmate_core::catalog::Catalog;
use shopmate_core::error::{QueryError, Result};
use shopmate_nlu::{EntityExtractor, IntentClassifier};
use std::sync::Arc;
use tracing::{debug, info};

/// The assembled pipeline, ready to answer queries.
pub struct ShoppingAgent {
    extractor: EntityExtractor,
    classifier: IntentClassifier,
    orchestrator: Orchestrator,
    catalog: Arc<dyn Catalog>,
    shipping: ShippingConfig,
}

impl ShoppingAgent {
    pub fn new(catalog: Arc<dyn Catalog>, config: &AppConfig) -> Self {
        let registry = shopmate_tools::default_registry(catalog.clone(), &config.shipping);
        Self {
            extractor: EntityExtractor::new(catalog.store_names()),
            classifier: IntentClassifier::new(),
            orchestrator: Orchestrator::new(registry),
            catalog,
            shipping: config.shipping.clone(),
        }
    }

    /// Pin the date used for deadline resolution and shipping estimates.
    /// Test seam; production uses today.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.extractor = EntityExtractor::new(self.catalog.store_names()).with_reference_date(date);
        self.orchestrator = Orchestrator::new(shopmate_tools::registry_at(
            self.catalog.clone(),
            &self.shipping,
            date,
        ));
        self
    }

    /// Answer one query.
    ///
    /// Blank input gets the fixed cannot-understand reply. Tool-level
    /// misses come back as part of the reply text; an `Err` here means
    /// broken wiring, not a disappointing answer.
    pub async fn handle(&self, text: &str) -> Result<String> {
        let entities = match self.extractor.extract(text) {
            Ok(entities) => entities,
            Err(QueryError::Empty) => return Ok(CANNOT_UNDERSTAND.to_string()),
            Err(e) => return Err(e.into()),
        };
        debug!(?entities, "extracted");

        let intent = self.classifier.classify(&entities, text);
        info!(primary = ?intent.primary, modifiers = ?intent.modifiers, "classified");

        let plan = planner::build_plan(&intent, &entities);
        let results = self.orchestrator.run(&plan).await?;
        Ok(composer::compose(&results))
    }
}
