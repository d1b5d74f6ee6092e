//! LLM client abstractions and the conversational session

pub mod client;
pub mod message;
pub mod providers;
pub mod session;

pub use client::LlmClient;
pub use message::{ChatMessage, MessageRole};
pub use providers::OpenAiClient;
pub use session::ChatSession;
