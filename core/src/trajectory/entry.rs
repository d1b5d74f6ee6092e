//! Trajectory entry structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded event in a query trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    /// When the event happened
    pub timestamp: DateTime<Utc>,

    /// Turn number the event belongs to, if any
    pub turn: Option<usize>,

    /// The event payload
    #[serde(flatten)]
    pub kind: TrajectoryEntryKind,
}

/// Payload of a trajectory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrajectoryEntryKind {
    /// A query started
    QueryStart { question: String, max_turns: usize },

    /// A prompt was sent to the LLM provider
    LlmRequest {
        prompt: String,
        transcript_len: usize,
        model: String,
        provider: String,
    },

    /// The provider replied
    LlmResponse { reply: String },

    /// An action directive was dispatched to a tool
    ActionDispatch { name: String, argument: String },

    /// A tool produced an observation
    Observation {
        tool: String,
        success: bool,
        content: String,
    },

    /// The query reached a terminal state
    QueryComplete {
        answered: bool,
        summary: String,
        turns: usize,
        duration_ms: u64,
    },
}

impl TrajectoryEntry {
    fn new(turn: Option<usize>, kind: TrajectoryEntryKind) -> Self {
        Self {
            timestamp: Utc::now(),
            turn,
            kind,
        }
    }

    /// Record a query start
    pub fn query_start(question: String, max_turns: usize) -> Self {
        Self::new(
            None,
            TrajectoryEntryKind::QueryStart {
                question,
                max_turns,
            },
        )
    }

    /// Record a request to the LLM provider
    pub fn llm_request(
        prompt: String,
        transcript_len: usize,
        model: String,
        provider: String,
        turn: usize,
    ) -> Self {
        Self::new(
            Some(turn),
            TrajectoryEntryKind::LlmRequest {
                prompt,
                transcript_len,
                model,
                provider,
            },
        )
    }

    /// Record a provider reply
    pub fn llm_response(reply: String, turn: usize) -> Self {
        Self::new(Some(turn), TrajectoryEntryKind::LlmResponse { reply })
    }

    /// Record an action dispatch
    pub fn action_dispatch(name: String, argument: String, turn: usize) -> Self {
        Self::new(
            Some(turn),
            TrajectoryEntryKind::ActionDispatch { name, argument },
        )
    }

    /// Record a tool observation
    pub fn observation(tool: String, success: bool, content: String, turn: usize) -> Self {
        Self::new(
            Some(turn),
            TrajectoryEntryKind::Observation {
                tool,
                success,
                content,
            },
        )
    }

    /// Record query completion
    pub fn query_complete(answered: bool, summary: String, turns: usize, duration_ms: u64) -> Self {
        Self::new(
            None,
            TrajectoryEntryKind::QueryComplete {
                answered,
                summary,
                turns,
                duration_ms,
            },
        )
    }
}
