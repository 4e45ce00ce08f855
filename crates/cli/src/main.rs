//! Careku CLI
//!
//! Main entry point for the careku command-line tool: a retrieval-augmented
//! health-advice assistant over a compiled-in knowledge base.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, SearchCommand};
use careku_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Careku - retrieval-augmented health assistant
#[derive(Parser, Debug)]
#[command(name = "careku")]
#[command(about = "Retrieval-augmented health assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: ./careku.yaml)
    #[arg(short, long, global = true, env = "CAREKU_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Model identifier
    #[arg(short, long, global = true, env = "CAREKU_MODEL")]
    model: Option<String>,

    /// Sampling temperature (0.0-2.0)
    #[arg(short, long, global = true)]
    temperature: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a health question with retrieved context
    Ask(AskCommand),

    /// Inspect retrieval: rank knowledge documents for a query
    Search(SearchCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.config,
        cli.model,
        cli.temperature,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    config.validate()?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Careku CLI starting");
    tracing::debug!("Model: {}", config.model);
    tracing::debug!("Gateway: {}", config.base_url);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Search(_) => "search",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Search(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
