//! LLM provider abstraction and the OpenAI-compatible backend.
//!
//! Agents hold a shared [`LlmHandle`]; the concrete provider is selected from
//! [`LlmConfig`] and hidden behind the [`LlmProvider`] trait so tests can
//! substitute a mock.

pub mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::{
    ChatMessage, ChatRole, CompletionRequest, CompletionResponse, LlmError, LlmProvider,
    TokenUsage, ToolCallRequest, ToolFunction,
};

use std::sync::Arc;

/// Which backend serves chat completions
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ProviderKind {
    /// OpenAI or any API speaking the chat-completions dialect
    OpenAi,
}

/// Connection and sampling settings for the shared model handle
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmConfig {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            temperature: 0.5,
            max_tokens: 2048,
        }
    }

    /// Build config from the environment: `OPENAI_API_KEY`, `OPENAI_MODEL`
    /// (default `gpt-4.1`), `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::NotConfigured("OPENAI_API_KEY is not set".to_string()))?;
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1".to_string());
        let mut config = Self::new(api_key, model);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A shared language-model handle: config plus the provider serving it.
///
/// Cheap to clone; every agent in a crew typically shares one.
#[derive(Clone)]
pub struct LlmHandle {
    pub config: LlmConfig,
    pub provider: Arc<dyn LlmProvider>,
}

impl LlmHandle {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let provider: Arc<dyn LlmProvider> = match config.provider {
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
                config.api_key.clone(),
                config.base_url.clone(),
            )?),
        };
        Ok(Self { config, provider })
    }

    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(LlmConfig::from_env()?)
    }

    /// Wrap an already-built provider (used by tests to inject mocks)
    pub fn with_provider(config: LlmConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self { config, provider }
    }
}

impl std::fmt::Debug for LlmHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmHandle")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
