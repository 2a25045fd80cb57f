//! Subcommand implementations.

pub mod ask;
pub mod demo;
pub mod repl;

use shopmate_agent::ShoppingAgent;
use shopmate_catalog::MockCatalog;
use shopmate_config::AppConfig;
use std::sync::Arc;
use tracing::info;

/// Load config and wire up the pipeline. The catalog comes from the
/// configured TOML path when set, the built-in demo data otherwise.
pub fn build_agent() -> Result<ShoppingAgent, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let catalog = match &config.catalog.path {
        Some(path) => {
            let catalog = MockCatalog::from_toml_path(path)
                .map_err(|e| format!("Failed to load catalog: {e}"))?;
            info!(path = %path.display(), "using catalog file");
            catalog
        }
        None => MockCatalog::demo(),
    };

    Ok(ShoppingAgent::new(Arc::new(catalog), &config))
}
