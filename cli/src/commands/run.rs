//! Single-question command

use crate::config::CliConfigLoader;
use crate::output::CliOutput;
use anyhow::{Context, Result};
use reagent_core::{AgentBuilder, AgentCore, TrajectoryRecorder};
use std::path::PathBuf;

/// Build an agent from the resolved configuration
pub fn build_agent(
    config_loader: &CliConfigLoader,
    max_turns: Option<usize>,
    trajectory_file: Option<PathBuf>,
) -> Result<AgentCore> {
    let llm_config = config_loader.load()?;

    let mut builder = AgentBuilder::new(llm_config);
    if let Some(max_turns) = max_turns {
        builder = builder.with_max_turns(max_turns);
    }

    let mut agent = builder
        .build_with_output(Box::new(CliOutput::new()))
        .context("Failed to create agent")?;

    if let Some(path) = trajectory_file {
        agent.set_trajectory_recorder(TrajectoryRecorder::with_file(path));
    }

    Ok(agent)
}

/// Answer a single question and exit
pub async fn run_command(
    question: String,
    config_loader: CliConfigLoader,
    max_turns: Option<usize>,
    trajectory_file: Option<PathBuf>,
) -> Result<()> {
    let mut agent = build_agent(&config_loader, max_turns, trajectory_file)?;

    agent
        .query(&question)
        .await
        .context("Query failed")?;

    Ok(())
}
