//! Base tool trait and structures

use crate::error::{Result, ToolError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trait for all tools
///
/// A tool takes the single text argument of an action directive and produces
/// a single text result (the observation body).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool (the action name the model uses)
    fn name(&self) -> &str;

    /// Get the description of the tool, as shown in the system prompt
    fn description(&self) -> &str;

    /// Execute the tool with the given argument
    async fn execute(&self, argument: &str) -> Result<String>;
}

/// Result of a tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that ran
    pub tool: String,

    /// Whether the execution was successful
    pub success: bool,

    /// Result content (the observation text)
    pub content: String,

    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl ToolResult {
    /// Create a successful result
    pub fn success<S: Into<String>>(tool: S, content: S) -> Self {
        Self {
            tool: tool.into(),
            success: true,
            content: content.into(),
            duration_ms: 0,
        }
    }

    /// Create a failure result
    pub fn failure<S: Into<String>>(tool: S, reason: S) -> Self {
        Self {
            tool: tool.into(),
            success: false,
            content: format!("Error: {}", reason.into()),
            duration_ms: 0,
        }
    }

    /// Set execution duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Tool executor that manages tool execution
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// List all available tools, sorted by name
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool by name.
    ///
    /// A missing registry entry is an error for the caller to handle; an
    /// execution failure is contained into a failure `ToolResult` so the
    /// loop can feed it back as an observation.
    pub async fn execute(&self, name: &str, argument: &str) -> Result<ToolResult> {
        let tool = self.get_tool(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
        })?;

        let start_time = std::time::Instant::now();
        let result = tool.execute(argument).await;
        let duration = start_time.elapsed().as_millis() as u64;

        match result {
            Ok(content) => Ok(ToolResult::success(name, content.as_str()).with_duration(duration)),
            Err(e) => {
                tracing::debug!("Tool {} failed: {}", name, e);
                Ok(ToolResult::failure(name, e.to_string().as_str()).with_duration(duration))
            }
        }
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the argument back"
        }

        async fn execute(&self, argument: &str) -> Result<String> {
            Ok(argument.to_string())
        }
    }

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> &str {
            "failing"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        async fn execute(&self, _argument: &str) -> Result<String> {
            Err(ToolError::ExecutionFailed {
                name: "failing".to_string(),
                message: "boom".to_string(),
            }
            .into())
        }
    }

    #[tokio::test]
    async fn test_execute_dispatches_to_registered_tool() {
        let mut executor = ToolExecutor::new();
        executor.register_tool(Box::new(EchoTool));

        let result = executor.execute("echo", "hello").await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "hello");
        assert_eq!(result.tool, "echo");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let executor = ToolExecutor::new();
        let result = executor.execute("missing", "arg").await;
        assert!(matches!(
            result,
            Err(Error::Tool(ToolError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_execution_failure_is_contained() {
        let mut executor = ToolExecutor::new();
        executor.register_tool(Box::new(FailingTool));

        let result = executor.execute("failing", "arg").await.unwrap();
        assert!(!result.success);
        assert!(result.content.starts_with("Error: "));
        assert!(result.content.contains("boom"));
    }

    #[test]
    fn test_list_tools_is_sorted() {
        let mut executor = ToolExecutor::new();
        executor.register_tool(Box::new(FailingTool));
        executor.register_tool(Box::new(EchoTool));
        assert_eq!(executor.list_tools(), vec!["echo", "failing"]);
    }
}
