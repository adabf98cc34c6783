//! # workbench CLI
//!
//! Command-line interface for anomaly-workbench - the configuration contract
//! of the anomaly-detection getting-started workflow.
//!
//! ## Usage
//!
//! - `workbench` - Print the resolved workflow configuration
//! - `workbench show --json` - Emit the configuration as JSON
//! - `workbench init` - Scaffold a workbench.json for a scenario
//! - `workbench scenarios` - List built-in dataset scenarios

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{init_command, scenarios_command, show_command};
use config::CliConfigLoader;

/// workbench - storage layout and resource naming for anomaly detection
#[derive(Parser)]
#[command(name = "workbench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Storage layout and resource naming for the anomaly-detection getting-started workflow")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in scenario to resolve (water-pump, synthetic)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Bucket name override
    #[arg(short, long)]
    bucket: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved workflow configuration
    Show {
        /// Emit the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a workbench.json scaffold for the selected scenario
    Init {
        /// Output path for the scaffold
        #[arg(short, long, default_value = "workbench.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List built-in dataset scenarios
    Scenarios,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(scenario) = &cli.scenario {
        loader = loader.with_scenario_override(scenario.clone());
    }

    if let Some(bucket) = &cli.bucket {
        loader = loader.with_bucket_override(bucket.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Show { json }) => show_command(config_loader, json).await,
        Some(Commands::Init { output, force }) => {
            init_command(cli.scenario.clone(), output, force).await
        }
        Some(Commands::Scenarios) => scenarios_command().await,
        // Default to showing the resolved configuration
        None => show_command(config_loader, false).await,
    }
}
