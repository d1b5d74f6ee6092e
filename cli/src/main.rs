//! # reagent CLI
//!
//! Command-line interface for Reagent - a minimal ReAct loop agent.
//!
//! ## Usage
//!
//! - `reagent` - Start the interactive question loop
//! - `reagent "question"` - Answer a single question
//! - `reagent tools` - Show available tools
//!
//! Questions are answered by a loop of model Thought/Action steps and tool
//! observations, printed as they happen.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{interactive_command, run_command, tools_command};
use config::CliConfigLoader;

/// reagent - a minimal ReAct loop agent
#[derive(Parser)]
#[command(name = "reagent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A minimal ReAct loop agent written in Rust")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key override
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Model name override
    #[arg(long)]
    model: Option<String>,

    /// Maximum number of turns per question
    #[arg(long)]
    max_turns: Option<usize>,

    /// Output trajectory file
    #[arg(long)]
    trajectory_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// The question to answer (if provided, runs in single-question mode)
    question: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show available tools
    Tools,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(api_key) = &cli.api_key {
        loader = loader.with_api_key_override(api_key.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config_loader = build_config_loader(&cli);

    match (cli.question, cli.command) {
        // If a question is provided, run in single-question mode
        (Some(question), None) => {
            run_command(
                question,
                config_loader,
                cli.max_turns,
                cli.trajectory_file,
            )
            .await
        }
        // A question together with a subcommand is an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a question and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Tools)) => tools_command(),
        // Default to interactive mode
        (None, None) => {
            interactive_command(config_loader, cli.max_turns, cli.trajectory_file).await
        }
    }
}
