//! Shopmate CLI — the main entry point.
//!
//! Commands:
//! - `ask`   — Answer a single query
//! - `repl`  — Interactive query loop
//! - `demo`  — Run the built-in showcase queries

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "shopmate",
    about = "Shopmate — rule-based shopping assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query and exit
    Ask {
        /// The query text, e.g. "find a floral skirt under $140"
        #[arg(short, long)]
        query: String,
    },

    /// Interactive query loop
    Repl,

    /// Run the built-in showcase queries against the demo catalog
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ask { query } => commands::ask::run(&query).await?,
        Commands::Repl => commands::repl::run().await?,
        Commands::Demo => commands::demo::run().await?,
    }

    Ok(())
}
