use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::agent::agent::Agent;
use crate::error::CrewError;
use crate::llm::{ChatMessage, CompletionRequest, LlmError, TokenUsage, ToolCallRequest};
use crate::task::{Task, TaskOutput};

const MAX_OUTPUT_RETRIES: usize = 3;
// Guard against a model that keeps requesting tools without ever answering
const MAX_TOOL_ROUNDS: usize = 8;

impl Agent {
    /// Execute a task: run the chat loop, dispatch tool calls, and retry on
    /// output-validation failure up to a bounded number of attempts.
    pub async fn execute(&self, task: &Task, context: Option<&str>) -> Result<TaskOutput, CrewError> {
        let start = Instant::now();
        let mut usage = TokenUsage::default();
        let mut tools_used = Vec::new();
        let mut messages = self.build_initial_messages(task, context);

        info!(role = %self.role, task_id = %task.id, "agent starting task");

        for attempt in 1..=MAX_OUTPUT_RETRIES {
            let content = self
                .run_chat_loop(&mut messages, &mut usage, &mut tools_used)
                .await?;

            match task.validate_output(&content) {
                Ok(()) => {
                    if self.verbose {
                        println!("[{}] {}", self.role, content);
                    }
                    return Ok(TaskOutput {
                        task_id: task.id.clone(),
                        description: task.description.clone(),
                        raw: content,
                        usage,
                        tools_used,
                        execution_time_ms: start.elapsed().as_millis() as u64,
                    });
                }
                Err(validation_error) => {
                    warn!(
                        role = %self.role,
                        attempt,
                        %validation_error,
                        "output validation failed"
                    );
                    if attempt == MAX_OUTPUT_RETRIES {
                        return Err(CrewError::Validation {
                            attempts: MAX_OUTPUT_RETRIES,
                            message: validation_error.to_string(),
                        });
                    }
                    // the model must see what it is being asked to correct
                    messages.push(ChatMessage::assistant(content));
                    messages.push(ChatMessage::user(format!(
                        "Your previous response was invalid: {validation_error}. \
                         Please provide a corrected response in the required format."
                    )));
                }
            }
        }

        Err(CrewError::Validation {
            attempts: MAX_OUTPUT_RETRIES,
            message: "maximum retry attempts exceeded".to_string(),
        })
    }

    /// Drive completions until the model returns content instead of tool calls
    async fn run_chat_loop(
        &self,
        messages: &mut Vec<ChatMessage>,
        usage: &mut TokenUsage,
        tools_used: &mut Vec<String>,
    ) -> Result<String, CrewError> {
        let tool_descriptions: Vec<_> = self.tools.iter().map(|t| t.describe()).collect();

        for _ in 0..MAX_TOOL_ROUNDS {
            let request = CompletionRequest::new(
                messages.clone(),
                self.llm.config.model.clone(),
                Some(self.llm.config.temperature),
                Some(self.llm.config.max_tokens),
                tool_descriptions.clone(),
            );

            let response = self.llm.provider.complete(request).await?;
            usage.accumulate(&response.usage);

            if !response.tool_calls.is_empty() {
                messages.push(ChatMessage::assistant_tool_calls(response.tool_calls.clone()));
                for call in response.tool_calls {
                    let result = self.dispatch_tool_call(&call, tools_used).await;
                    messages.push(ChatMessage::tool_result(call.id, result.to_string()));
                }
                continue;
            }

            return match response.content {
                Some(content) if !content.is_empty() => Ok(content),
                _ => Err(LlmError::Parse("model returned an empty message".to_string()).into()),
            };
        }

        Err(LlmError::Api(format!(
            "model did not produce an answer within {MAX_TOOL_ROUNDS} tool rounds"
        ))
        .into())
    }

    /// Execute one requested tool call. Tool failures are fed back to the
    /// model as an error payload rather than aborting the task.
    async fn dispatch_tool_call(
        &self,
        call: &ToolCallRequest,
        tools_used: &mut Vec<String>,
    ) -> Value {
        let name = &call.function.name;
        tools_used.push(name.clone());

        let Some(tool) = self.find_tool(name) else {
            warn!(tool = %name, "model requested unknown tool");
            return json!({"error": format!("unknown tool: {name}")});
        };

        let parameters: Value =
            serde_json::from_str(&call.function.arguments).unwrap_or_else(|_| json!({}));

        debug!(tool = %name, "dispatching tool call");
        match tool.execute(&parameters).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %name, error = %e, "tool execution failed");
                json!({"error": e.to_string()})
            }
        }
    }
}
