//! LLM client trait

use crate::error::Result;
use async_trait::async_trait;

use super::message::ChatMessage;

/// Trait for LLM clients
///
/// The ReAct protocol is carried entirely in message text, so the contract is
/// a plain chat completion: the full ordered transcript in, one assistant
/// reply out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a chat completion request and return the assistant reply text
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
