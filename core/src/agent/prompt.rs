//! The fixed ReAct system prompt

use crate::tools::ToolExecutor;

/// Protocol preamble shown before the action list
const PROMPT_HEADER: &str = "\
You run in a loop of Thought, Action, PAUSE, Observation.
At the end of the loop you output an Answer.
Use Thought to describe your thoughts about the question you have been asked.
Use Action to run one of the actions available to you - then return PAUSE.
Observation will be the result of running those actions.

Your available actions are:";

/// Guidance and worked example shown after the action list
const PROMPT_FOOTER: &str = "\
Always look things up on Wikipedia if you have the opportunity to do so.
For image generation requests, use the generate_image action with a detailed description.

Example session:

Question: What is the capital of France?
Thought: I should look up France on Wikipedia
Action: wikipedia: France
PAUSE

You will be called again with this:

Observation: France is a country. The capital is Paris.

You then output:

Answer: The capital of France is Paris";

/// Build the system prompt describing the protocol and the registered
/// actions. The action blocks come from each tool's own description, so the
/// prompt always matches what the executor can actually dispatch.
pub fn build_system_prompt(executor: &ToolExecutor) -> String {
    let mut prompt = String::from(PROMPT_HEADER);

    for name in executor.list_tools() {
        if let Some(tool) = executor.get_tool(name) {
            prompt.push_str("\n\n");
            prompt.push_str(name);
            prompt.push_str(":\n");
            prompt.push_str(tool.description());
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(PROMPT_FOOTER);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolRegistry;

    #[test]
    fn test_prompt_lists_all_registered_actions() {
        let executor = ToolRegistry::default().create_executor_with_all();
        let prompt = build_system_prompt(&executor);

        assert!(prompt.contains("Thought, Action, PAUSE, Observation"));
        assert!(prompt.contains("wikipedia:"));
        assert!(prompt.contains("calculate:"));
        assert!(prompt.contains("simon_blog_search:"));
        assert!(prompt.contains("generate_image:"));
        assert!(prompt.contains("Answer: The capital of France is Paris"));
    }

    #[test]
    fn test_prompt_omits_unregistered_actions() {
        let executor =
            ToolRegistry::default().create_executor(&["calculate".to_string()]);
        let prompt = build_system_prompt(&executor);

        assert!(prompt.contains("calculate:"));
        assert!(!prompt.contains("wikipedia:\n"));
    }
}
