//! Agent configuration structures

use serde::{Deserialize, Serialize};

/// Default number of request/response cycles per query
pub const DEFAULT_MAX_TURNS: usize = 5;

fn default_max_turns() -> usize {
    DEFAULT_MAX_TURNS
}

/// Configuration for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum number of turns per query
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// List of tools available to this agent
    pub tools: Vec<String>,

    /// Custom system prompt for the agent (optional)
    /// If not provided, the built-in ReAct prompt will be used
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            tools: vec![
                "wikipedia".to_string(),
                "calculate".to_string(),
                "simon_blog_search".to_string(),
                "generate_image".to_string(),
            ],
            system_prompt: None,
        }
    }
}

/// Builder for creating agents with resolved LLM configuration
pub struct AgentBuilder {
    llm_config: crate::config::ResolvedLlmConfig,
    agent_config: AgentConfig,
}

impl AgentBuilder {
    /// Create a new agent builder with LLM configuration
    pub fn new(llm_config: crate::config::ResolvedLlmConfig) -> Self {
        Self {
            llm_config,
            agent_config: AgentConfig::default(),
        }
    }

    /// Set agent configuration
    pub fn with_agent_config(mut self, agent_config: AgentConfig) -> Self {
        self.agent_config = agent_config;
        self
    }

    /// Set maximum turns
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.agent_config.max_turns = max_turns;
        self
    }

    /// Set tools
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.agent_config.tools = tools;
        self
    }

    /// Set system prompt
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.agent_config.system_prompt = system_prompt;
        self
    }

    /// Build the agent with the given output handler
    pub fn build_with_output(
        self,
        output: Box<dyn crate::output::AgentOutput>,
    ) -> crate::error::Result<super::AgentCore> {
        super::AgentCore::new_with_llm_config(self.agent_config, self.llm_config, output)
    }

    /// Build the agent with null output (for testing)
    pub fn build(self) -> crate::error::Result<super::AgentCore> {
        use crate::output::events::NullOutput;
        self.build_with_output(Box::new(NullOutput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
        assert_eq!(config.tools.len(), 4);
        assert_eq!(config.system_prompt, None);
    }

    #[test]
    fn test_config_serialization_defaults_max_turns() {
        let config: AgentConfig = serde_json::from_str(r#"{"tools": ["calculate"]}"#).unwrap();
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
        assert_eq!(config.tools, vec!["calculate".to_string()]);
    }
}
