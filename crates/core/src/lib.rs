//! # Shopmate Core
//!
//! Domain types, traits, and error definitions for the Shopmate shopping
//! assistant. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The catalog and the tools are defined as traits here. Implementations
//! live in their respective crates. This enables:
//! - Swapping catalogs (demo data vs. TOML files vs. test fixtures)
//! - Easy testing with stub tools
//! - Clean dependency graph (all crates depend inward on core)

pub mod catalog;
pub mod entities;
pub mod error;
pub mod intent;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use catalog::{Catalog, Product, ReturnPolicy, SearchFilters};
pub use entities::Entities;
pub use error::{CatalogError, Error, QueryError, Result, ToolError};
pub use intent::{Modifier, PrimaryIntent, QueryIntent};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult, ToolStatus};
