//! Interactive question loop

use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use std::path::PathBuf;

/// Run the interactive read-line loop.
///
/// Each non-"quit" line is a fresh query. A failed query is reported and the
/// loop continues; only configuration problems abort the process.
pub async fn interactive_command(
    config_loader: CliConfigLoader,
    max_turns: Option<usize>,
    trajectory_file: Option<PathBuf>,
) -> Result<()> {
    let mut agent = super::run::build_agent(&config_loader, max_turns, trajectory_file)?;

    loop {
        let question: String = Input::new()
            .with_prompt("\nEnter your question (or 'quit' to exit)")
            .interact_text()?;

        let question = question.trim().to_string();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Err(e) = agent.query(&question).await {
            eprintln!("{}", format!("Query failed: {}", e).red());
        }
    }

    Ok(())
}
