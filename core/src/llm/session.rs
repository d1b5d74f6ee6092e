//! Conversational session over an LLM client
//!
//! A `ChatSession` owns the ordered transcript of one query and brokers calls
//! to the injected provider client. The transcript is append-only: messages
//! are added, never edited or removed, and no size bound is enforced.

use std::sync::Arc;

use crate::error::Result;
use crate::llm::{ChatMessage, LlmClient};

/// An append-only conversation with an LLM provider
pub struct ChatSession {
    client: Arc<dyn LlmClient>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a session, seeding the transcript with one system message if
    /// `system_prompt` is non-empty
    pub fn new(client: Arc<dyn LlmClient>, system_prompt: &str) -> Self {
        let mut transcript = Vec::new();
        if !system_prompt.is_empty() {
            transcript.push(ChatMessage::system(system_prompt));
        }
        Self { client, transcript }
    }

    /// Append a user message, ask the provider to continue the transcript,
    /// append its reply, and return the reply text.
    ///
    /// Provider failures propagate to the caller unmodified; there is no
    /// retry.
    pub async fn send<S: Into<String>>(&mut self, user_text: S) -> Result<String> {
        self.transcript.push(ChatMessage::user(user_text));
        let reply = self.client.chat_completion(&self.transcript).await?;
        self.transcript.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// The full ordered transcript so far
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LlmError};
    use crate::llm::MessageRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock client that pops scripted replies in order
    struct ScriptedClient {
        replies: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().rev().map(|r| r.to_string()).collect()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat_completion(&self, _messages: &[ChatMessage]) -> Result<String> {
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| Error::Llm(LlmError::EmptyResponse))
        }

        fn model_name(&self) -> &str {
            "scripted"
        }

        fn provider_name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_send_appends_user_and_assistant_pairs() {
        let client = ScriptedClient::new(&["first reply", "second reply"]);
        let mut session = ChatSession::new(client, "system prompt");
        assert_eq!(session.len(), 1);

        let reply = session.send("question one").await.unwrap();
        assert_eq!(reply, "first reply");
        assert_eq!(session.len(), 3);

        session.send("question two").await.unwrap();
        assert_eq!(session.len(), 5);

        let roles: Vec<MessageRole> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_system_prompt_is_not_seeded() {
        let client = ScriptedClient::new(&["reply"]);
        let mut session = ChatSession::new(client, "");
        assert!(session.is_empty());

        session.send("question").await.unwrap();
        assert_eq!(session.transcript()[0].role, MessageRole::User);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let client = ScriptedClient::new(&[]);
        let mut session = ChatSession::new(client, "system");
        let result = session.send("question").await;
        assert!(matches!(result, Err(Error::Llm(LlmError::EmptyResponse))));
    }
}
