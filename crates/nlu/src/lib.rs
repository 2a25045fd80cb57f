//! Rule-based natural-language understanding for Shopmate.
//!
//! Two deterministic, single-pass stages:
//! - [`EntityExtractor`] — ordered pattern tables turn free text into
//!   typed, optional slots.
//! - [`IntentClassifier`] — a fixed cue-priority list assigns one primary
//!   intent plus modifiers.
//!
//! No learned models, no dialogue state: the same text always produces the
//! same entities and intent.

pub mod classifier;
pub mod extractor;

pub use classifier::IntentClassifier;
pub use extractor::EntityExtractor;
