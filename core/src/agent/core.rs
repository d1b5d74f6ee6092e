//! AgentCore implementation: the ReAct loop

use super::config::AgentConfig;
use super::outcome::{QueryExecution, QueryOutcome};
use super::parser::parse_action;
use super::prompt::build_system_prompt;
use crate::error::{AgentError, Result};
use crate::llm::{ChatSession, LlmClient};
use crate::output::{AgentEvent, AgentOutput};
use crate::tools::{ToolExecutor, ToolRegistry};
use crate::trajectory::{TrajectoryEntry, TrajectoryRecorder};
use std::sync::Arc;
use std::time::Instant;

/// The ReAct agent: drives Thought/Action/Observation turns over a
/// conversational session until the model answers or the turn limit is hit
pub struct AgentCore {
    config: AgentConfig,
    llm_client: Arc<dyn LlmClient>,
    tool_executor: ToolExecutor,
    trajectory_recorder: Option<TrajectoryRecorder>,
    output: Box<dyn AgentOutput>,
}

impl AgentCore {
    /// Create a new AgentCore with resolved LLM configuration
    pub fn new_with_llm_config(
        agent_config: AgentConfig,
        llm_config: crate::config::ResolvedLlmConfig,
        output: Box<dyn AgentOutput>,
    ) -> Result<Self> {
        let llm_client: Arc<dyn LlmClient> =
            Arc::new(crate::llm::OpenAiClient::new(&llm_config)?);

        let tool_registry = ToolRegistry::default();
        let tool_executor = tool_registry.create_executor(&agent_config.tools);

        Ok(Self::new_with_client(
            agent_config,
            llm_client,
            tool_executor,
            output,
        ))
    }

    /// Create a new AgentCore with an injected client and executor
    pub fn new_with_client(
        agent_config: AgentConfig,
        llm_client: Arc<dyn LlmClient>,
        tool_executor: ToolExecutor,
        output: Box<dyn AgentOutput>,
    ) -> Self {
        Self {
            config: agent_config,
            llm_client,
            tool_executor,
            trajectory_recorder: None,
            output,
        }
    }

    /// Get agent configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Set the trajectory recorder
    pub fn set_trajectory_recorder(&mut self, recorder: TrajectoryRecorder) {
        self.trajectory_recorder = Some(recorder);
    }

    /// Get the trajectory recorder
    pub fn trajectory_recorder(&self) -> Option<&TrajectoryRecorder> {
        self.trajectory_recorder.as_ref()
    }

    /// The system prompt for this agent
    fn system_prompt(&self) -> String {
        match &self.config.system_prompt {
            Some(custom) => custom.clone(),
            None => build_system_prompt(&self.tool_executor),
        }
    }

    async fn record(&self, entry: TrajectoryEntry) -> Result<()> {
        if let Some(recorder) = &self.trajectory_recorder {
            recorder.record(entry).await?;
        }
        Ok(())
    }

    /// Run one query to a terminal state.
    ///
    /// Each turn sends the pending prompt to a fresh-per-query session,
    /// scans the reply for the first action directive, dispatches it, and
    /// feeds the observation back as the next prompt. The loop ends when a
    /// reply carries no directive (answered) or after `max_turns` turns
    /// (exhausted). An action naming an unregistered tool is fatal to the
    /// query.
    pub async fn query(&mut self, question: &str) -> Result<QueryExecution> {
        let start_time = Instant::now();

        let system_prompt = self.system_prompt();
        let mut session = ChatSession::new(self.llm_client.clone(), &system_prompt);

        let _ = self
            .output
            .emit_event(AgentEvent::QueryStarted {
                question: question.to_string(),
                max_turns: self.config.max_turns,
            })
            .await;
        self.record(TrajectoryEntry::query_start(
            question.to_string(),
            self.config.max_turns,
        ))
        .await?;

        let mut next_prompt = question.to_string();
        let mut tool_calls = 0;
        let mut last_reply = String::new();

        for turn in 1..=self.config.max_turns {
            self.record(TrajectoryEntry::llm_request(
                next_prompt.clone(),
                session.len(),
                self.llm_client.model_name().to_string(),
                self.llm_client.provider_name().to_string(),
                turn,
            ))
            .await?;

            // Provider failures propagate unmodified; no retry
            let reply = session.send(next_prompt.as_str()).await?;

            self.record(TrajectoryEntry::llm_response(reply.clone(), turn)).await?;
            let _ = self
                .output
                .emit_event(AgentEvent::ModelReply {
                    turn,
                    text: reply.clone(),
                })
                .await;

            let directive = match parse_action(&reply) {
                Some(directive) => directive,
                None => {
                    // Terminal: the reply is the final answer
                    let duration_ms = start_time.elapsed().as_millis() as u64;
                    let _ = self
                        .output
                        .emit_event(AgentEvent::QueryCompleted {
                            answered: true,
                            turns: turn,
                            summary: format!("Answered after {} turn(s)", turn),
                        })
                        .await;
                    self.record(TrajectoryEntry::query_complete(
                        true,
                        format!("Answered after {} turn(s)", turn),
                        turn,
                        duration_ms,
                    ))
                    .await?;

                    return Ok(QueryExecution {
                        outcome: QueryOutcome::Answered { text: reply },
                        turns: turn,
                        tool_calls,
                        duration_ms,
                    });
                }
            };

            if self.tool_executor.get_tool(&directive.name).is_none() {
                let _ = self
                    .output
                    .error(&format!("Unknown action: {}", directive.name))
                    .await;
                return Err(AgentError::UnknownAction {
                    name: directive.name,
                    argument: directive.argument,
                }
                .into());
            }

            tracing::debug!("Running {} {}", directive.name, directive.argument);
            let _ = self
                .output
                .emit_event(AgentEvent::ActionDispatched {
                    turn,
                    name: directive.name.clone(),
                    argument: directive.argument.clone(),
                })
                .await;
            self.record(TrajectoryEntry::action_dispatch(
                directive.name.clone(),
                directive.argument.clone(),
                turn,
            ))
            .await?;

            let result = self
                .tool_executor
                .execute(&directive.name, &directive.argument)
                .await?;
            tool_calls += 1;

            let _ = self
                .output
                .emit_event(AgentEvent::Observation {
                    turn,
                    tool: result.tool.clone(),
                    success: result.success,
                    text: result.content.clone(),
                })
                .await;
            self.record(TrajectoryEntry::observation(
                result.tool.clone(),
                result.success,
                result.content.clone(),
                turn,
            ))
            .await?;

            next_prompt = format!("Observation: {}", result.content);
            last_reply = reply;
        }

        // Turn limit reached without a final reply
        let duration_ms = start_time.elapsed().as_millis() as u64;
        let turns = self.config.max_turns;
        let _ = self
            .output
            .emit_event(AgentEvent::QueryCompleted {
                answered: false,
                turns,
                summary: format!("No answer after {} turn(s)", turns),
            })
            .await;
        self.record(TrajectoryEntry::query_complete(
            false,
            format!("No answer after {} turn(s)", turns),
            turns,
            duration_ms,
        ))
        .await?;

        Ok(QueryExecution {
            outcome: QueryOutcome::Exhausted { last_reply },
            turns,
            tool_calls,
            duration_ms,
        })
    }
}
