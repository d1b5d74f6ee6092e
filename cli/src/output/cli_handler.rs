//! Colored terminal implementation of the core output interface

use async_trait::async_trait;
use colored::Colorize;
use reagent_core::output::{AgentEvent, AgentOutput, MessageLevel};

/// Prints agent events to the terminal as they happen
pub struct CliOutput;

impl CliOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentOutput for CliOutput {
    async fn emit_event(
        &self,
        event: AgentEvent,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match event {
            AgentEvent::QueryStarted { .. } => {}
            AgentEvent::ModelReply { text, .. } => {
                println!("{}", text);
            }
            AgentEvent::ActionDispatched { name, argument, .. } => {
                println!("{}", format!(" -- running {} {}", name, argument).cyan());
            }
            AgentEvent::Observation { text, success, .. } => {
                let line = format!("Observation: {}", text);
                if success {
                    println!("{}", line.green());
                } else {
                    println!("{}", line.yellow());
                }
            }
            AgentEvent::QueryCompleted {
                answered, summary, ..
            } => {
                if !answered {
                    println!("{}", summary.yellow());
                }
            }
            AgentEvent::Message { level, content } => match level {
                MessageLevel::Debug => tracing::debug!("{}", content),
                MessageLevel::Info => println!("{}", content.dimmed()),
                MessageLevel::Warning => eprintln!("{}", content.yellow()),
                MessageLevel::Error => eprintln!("{}", content.red()),
            },
        }
        Ok(())
    }
}
