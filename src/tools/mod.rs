//! Agent tool system.
//!
//! Tools are external capabilities (web search, page scraping, file read,
//! sentiment scoring) an agent may invoke during its turn. Each tool exposes
//! a JSON-schema description that is forwarded to the model as a function
//! tool, and an async `execute`.

pub mod file_read;
pub mod scrape;
pub mod sentiment;
pub mod web_search;

pub use file_read::FileReadTool;
pub use scrape::ScrapeWebsiteTool;
pub use sentiment::SentimentAnalysisTool;
pub use web_search::WebSearchTool;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool interface: describe once, execute per model request
#[async_trait]
pub trait Tool: Send + Sync {
    /// JSON-serializable description forwarded to the model
    fn describe(&self) -> ToolDescription;

    /// Execute with parameters matching the described schema
    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError>;
}

/// Tool description sent to the model as a function-tool definition
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    /// JSON Schema for the parameters object
    pub parameters: Value,
}

#[derive(Debug, Clone, Error)]
pub enum ToolError {
    #[error("tool not configured: {0}")]
    NotConfigured(String),
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

/// Extract a required string parameter from a tool-call arguments object
pub(crate) fn require_str<'a>(parameters: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    parameters
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidParameters(format!("'{key}' parameter is required")))
}
