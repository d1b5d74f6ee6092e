//! Output abstraction layer for the agent loop
//!
//! Core emits events as the loop progresses; implementations decide how to
//! display them (CLI printing, logging, nothing at all for tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Events that can be emitted during a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AgentEvent {
    /// A query started
    QueryStarted { question: String, max_turns: usize },

    /// The model produced a reply for a turn
    ModelReply { turn: usize, text: String },

    /// An action directive was parsed and is being dispatched
    ActionDispatched {
        turn: usize,
        name: String,
        argument: String,
    },

    /// A tool produced an observation
    Observation {
        turn: usize,
        tool: String,
        success: bool,
        text: String,
    },

    /// The query reached a terminal state
    QueryCompleted {
        answered: bool,
        turns: usize,
        summary: String,
    },

    /// General message or log
    Message {
        level: MessageLevel,
        content: String,
    },
}

/// Message severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// Abstract output interface for agent execution
#[async_trait]
pub trait AgentOutput: Send + Sync {
    /// Emit an agent event
    async fn emit_event(
        &self,
        event: AgentEvent,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Emit a message with specified level
    async fn emit_message(
        &self,
        level: MessageLevel,
        content: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.emit_event(AgentEvent::Message {
            level,
            content: content.to_string(),
        })
        .await
    }

    /// Emit debug message
    async fn debug(
        &self,
        content: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.emit_message(MessageLevel::Debug, content).await
    }

    /// Emit info message
    async fn info(
        &self,
        content: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.emit_message(MessageLevel::Info, content).await
    }

    /// Emit warning message
    async fn warning(
        &self,
        content: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.emit_message(MessageLevel::Warning, content).await
    }

    /// Emit error message
    async fn error(
        &self,
        content: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.emit_message(MessageLevel::Error, content).await
    }
}

/// Null output handler that discards all events (useful for testing)
pub struct NullOutput;

#[async_trait]
impl AgentOutput for NullOutput {
    async fn emit_event(
        &self,
        _event: AgentEvent,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

/// Convenience module for handler implementations
pub mod events {
    pub use super::NullOutput;
}
