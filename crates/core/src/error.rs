//! Error types for the Shopmate domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! Domain-level tool outcomes (no product found, invalid discount code,
//! shipping deadline infeasible) are **not** errors — they are
//! [`ToolStatus`](crate::tool::ToolStatus) values on successful executions
//! and surface to the user as explanatory fragments.

use thiserror::Error;

/// The top-level error type for all Shopmate operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Query understanding errors ---
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Catalog errors ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Blank input — the only input rejected outright at the extractor
    /// boundary. Everything else degrades to fewer known entities.
    #[error("Query text is empty")]
    Empty,

    /// Two classifier rules tied for the same query. The cue priority list
    /// is totally ordered, so this is an internal invariant violation,
    /// never an expected state.
    #[error("Ambiguous intent: rules '{first}' and '{second}' tied")]
    AmbiguousIntent { first: String, second: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    /// The plan referenced a tool name that is not registered.
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}
