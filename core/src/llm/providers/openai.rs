//! OpenAI-compatible client implementation using the async-openai library

use crate::config::ResolvedLlmConfig;
use crate::error::{Error, LlmError, Result};
use crate::llm::{ChatMessage, LlmClient, MessageRole};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// Default base URL of the OpenAI API
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible client using the async-openai library
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    params: crate::config::ModelParams,
}

impl OpenAiClient {
    /// Create a new client from resolved LLM config
    pub fn new(config: &ResolvedLlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Llm(LlmError::Authentication {
                message: "No API key found for the LLM provider".to_string(),
            }));
        }

        let mut openai_config = OpenAIConfig::new().with_api_key(&config.api_key);

        // Set custom base URL if provided
        if config.base_url != OPENAI_DEFAULT_BASE_URL {
            openai_config = openai_config.with_api_base(&config.base_url);
        }

        let client = Client::with_config(openai_config);

        Ok(Self {
            client,
            model: config.model.clone(),
            params: config.params.clone(),
        })
    }

    /// Convert our internal message format to async-openai format
    fn convert_messages(&self, messages: &[ChatMessage]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|message| match message.role {
                MessageRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: message.content.clone().into(),
                        name: None,
                    },
                ),
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: message.content.clone().into(),
                        name: None,
                    })
                }
                MessageRole::Assistant => ChatCompletionRequestMessage::Assistant(
                    ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            message.content.clone(),
                        )),
                        ..Default::default()
                    },
                ),
            })
            .collect()
    }
}

fn map_openai_error(error: OpenAIError) -> Error {
    match error {
        OpenAIError::ApiError(api) => Error::Llm(LlmError::Api {
            message: api.message,
        }),
        other => Error::Llm(LlmError::Network {
            message: other.to_string(),
        }),
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let converted = self.convert_messages(messages);

        tracing::debug!(
            "Chat completion request: model={} messages={}",
            self.model,
            converted.len()
        );

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model);
        request_builder.messages(converted);

        if let Some(max_tokens) = self.params.max_tokens {
            request_builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = self.params.temperature {
            request_builder.temperature(temperature);
        }
        if let Some(top_p) = self.params.top_p {
            request_builder.top_p(top_p);
        }

        let request = request_builder.build().map_err(map_openai_error)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Llm(LlmError::EmptyResponse))
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ResolvedLlmConfig {
        ResolvedLlmConfig::new(
            OPENAI_DEFAULT_BASE_URL.to_string(),
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
        )
    }

    #[test]
    fn test_client_requires_api_key() {
        let mut bad = config();
        bad.api_key = String::new();
        assert!(OpenAiClient::new(&bad).is_err());
    }

    #[test]
    fn test_client_reports_model_and_provider() {
        let client = OpenAiClient::new(&config()).unwrap();
        assert_eq!(client.model_name(), "gpt-4o-mini");
        assert_eq!(client.provider_name(), "openai");
    }

    #[test]
    fn test_message_conversion_preserves_order_and_roles() {
        let client = OpenAiClient::new(&config()).unwrap();
        let messages = vec![
            ChatMessage::system("prompt"),
            ChatMessage::user("question"),
            ChatMessage::assistant("reply"),
        ];
        let converted = client.convert_messages(&messages);
        assert_eq!(converted.len(), 3);
        assert!(matches!(
            converted[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(
            converted[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }
}
