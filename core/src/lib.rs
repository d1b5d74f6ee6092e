//! # Reagent Core
//!
//! Core library for Reagent - a minimal ReAct loop agent.
//!
//! This library provides the conversational session, the
//! Thought/Action/Observation loop, and the built-in tools (Wikipedia
//! search, blog search, arithmetic, image generation) the loop can dispatch
//! to.

// Core modules
pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod output;
pub mod tools;
pub mod trajectory;

// Re-export commonly used types
pub use agent::{AgentBuilder, AgentConfig, AgentCore, QueryExecution, QueryOutcome};
pub use config::{ModelParams, ResolvedLlmConfig};
pub use trajectory::TrajectoryRecorder;

/// Current version of the reagent-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
