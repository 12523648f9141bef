//! Align - Entry Point
//!
//! Binary entry point for the map worker. Lives in the `align` facade crate
//! next to the library of the same name.

// Force-link align-providers so the linkme registrations are included
extern crate align_providers;

use std::path::PathBuf;

use align::run;
use align_application::ports::registry::{list_cache_providers, list_embedding_providers};
use align_infrastructure::config::loader::to_toml;
use align_infrastructure::logging::parse_log_level;
use clap::{Parser, Subcommand};

/// Command line interface for the Align map worker
#[derive(Parser, Debug)]
#[command(name = "align")]
#[command(about = "Align - maps code entities to their documentation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered embedding and cache providers
    Providers,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Providers) = cli.command {
        print_providers();
        return Ok(());
    }

    if cli.print_config {
        let mut config = align::init::load_config(cli.config.as_deref(), cli.log_level.as_deref())?;
        parse_log_level(&config.logging.level)?;
        if config.embedding.api_key.is_some() {
            config.embedding.api_key = Some("***".to_string());
        }
        print!("{}", to_toml(&config)?);
        return Ok(());
    }

    run(cli.config.as_deref(), cli.log_level.as_deref()).await
}

fn print_providers() {
    println!("Embedding providers:");
    for (name, description) in list_embedding_providers() {
        println!("  {name:<10} {description}");
    }
    println!("  {:<10} Deterministic fallback vectors only", "none");

    println!("Cache providers:");
    for (name, description) in list_cache_providers() {
        println!("  {name:<10} {description}");
    }
}
