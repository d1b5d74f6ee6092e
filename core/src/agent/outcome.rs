//! Query outcome structures
//!
//! A query ends in one of two terminal states, and callers can tell them
//! apart: the model produced a reply with no action directive (answered), or
//! the turn limit was reached first (exhausted).

use serde::{Deserialize, Serialize};

/// Terminal state of a query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The model produced a final reply containing no action directive
    Answered {
        /// The final reply text
        text: String,
    },

    /// The turn limit was reached before a final reply appeared
    Exhausted {
        /// The last model reply seen before the limit
        last_reply: String,
    },
}

impl QueryOutcome {
    /// Whether the loop terminated on the answered path
    pub fn is_answered(&self) -> bool {
        matches!(self, QueryOutcome::Answered { .. })
    }

    /// The text of the terminal reply, whichever path ended the loop
    pub fn text(&self) -> &str {
        match self {
            QueryOutcome::Answered { text } => text,
            QueryOutcome::Exhausted { last_reply } => last_reply,
        }
    }
}

/// Result of a completed query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryExecution {
    /// Terminal state
    pub outcome: QueryOutcome,

    /// Number of completed turns (model calls)
    pub turns: usize,

    /// Number of tool invocations
    pub tool_calls: usize,

    /// Total execution time in milliseconds
    pub duration_ms: u64,
}

impl QueryExecution {
    /// Whether the query ended with an answer
    pub fn is_answered(&self) -> bool {
        self.outcome.is_answered()
    }

    /// The terminal reply text
    pub fn final_text(&self) -> &str {
        self.outcome.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_paths_are_distinguishable() {
        let answered = QueryOutcome::Answered {
            text: "Answer: Paris".to_string(),
        };
        let exhausted = QueryOutcome::Exhausted {
            last_reply: "Thought: still working".to_string(),
        };

        assert!(answered.is_answered());
        assert!(!exhausted.is_answered());
        assert_eq!(answered.text(), "Answer: Paris");
        assert_eq!(exhausted.text(), "Thought: still working");
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let answered = QueryOutcome::Answered {
            text: "done".to_string(),
        };
        let json = serde_json::to_value(&answered).unwrap();
        assert_eq!(json["outcome"], "answered");
    }
}
