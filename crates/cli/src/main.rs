//! # Storefront CLI
//!
//! Command-line interface for the storefront database.
//!
//! ## Usage
//!
//! ```bash
//! storefront migrate          # Run database migrations
//! storefront seed --products 40
//! storefront clear            # Delete seeded data
//! storefront stats            # Row counts per table
//! storefront --help           # Show help
//! ```

mod commands;
mod config;

use clap::{CommandFactory as _, Parser};
use error::Result;

use crate::{commands::Commands, config::DatabaseConfig};

/// Storefront - sample data for an e-commerce database
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directive (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(long, env = "STOREFRONT_LOG_FORMAT", default_value = "pretty", global = true)]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Storefront CLI starting...");
    run(cli.command).await?;
    logging::info!(target: "app", "Storefront CLI completed successfully");
    Ok(())
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Migrate(args) => commands::migrate::migrate(&DatabaseConfig::from_env()?, &args).await?,
        Commands::Seed(args) => {
            commands::seed::seed(&DatabaseConfig::from_env()?, &args).await?;
        },
        Commands::Clear => {
            commands::clear::clear(&DatabaseConfig::from_env()?).await?;
        },
        Commands::Stats => {
            commands::stats::stats(&DatabaseConfig::from_env()?).await?;
        },
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command())?,
        Commands::Validate => commands::validate::validate()?,
    }
    Ok(())
}
