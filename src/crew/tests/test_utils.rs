use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::Agent;
use crate::llm::{
    CompletionRequest, CompletionResponse, LlmConfig, LlmError, LlmHandle, LlmProvider,
    TokenUsage, ToolCallRequest, ToolFunction,
};

/// One scripted provider turn
pub enum MockTurn {
    Content(String),
    ToolCall { name: String, arguments: String },
}

/// Scripted LLM provider that records every request it sees
pub struct MockProvider {
    turns: Mutex<VecDeque<MockTurn>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn scripted(turns: Vec<MockTurn>) -> Arc<Self> {
        Arc::new(Self {
            turns: Mutex::new(turns.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn with_contents(contents: &[&str]) -> Arc<Self> {
        Self::scripted(
            contents
                .iter()
                .map(|c| MockTurn::Content(c.to_string()))
                .collect(),
        )
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Concatenated message contents of the nth request seen
    pub fn request_text(&self, n: usize) -> String {
        let requests = self.requests.lock().unwrap();
        requests[n]
            .messages
            .iter()
            .filter_map(|m| m.content.clone())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        let turn = self
            .turns
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockTurn::Content("mock response".to_string()));

        let usage = TokenUsage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };

        let response = match turn {
            MockTurn::Content(content) => CompletionResponse {
                content: Some(content),
                tool_calls: vec![],
                usage,
                model: request.model,
            },
            MockTurn::ToolCall { name, arguments } => CompletionResponse {
                content: None,
                tool_calls: vec![ToolCallRequest {
                    id: "call_1".to_string(),
                    call_type: "function".to_string(),
                    function: ToolFunction { name, arguments },
                }],
                usage,
                model: request.model,
            },
        };

        Ok(response)
    }
}

pub fn test_handle(provider: Arc<MockProvider>) -> LlmHandle {
    LlmHandle::with_provider(
        LlmConfig::new("test-key".to_string(), "mock-model".to_string()),
        provider,
    )
}

pub fn test_agent(role: &str, handle: &LlmHandle) -> Agent {
    Agent::new(
        role,
        format!("Goal of {role}"),
        format!("Backstory of {role}"),
        handle,
    )
}
