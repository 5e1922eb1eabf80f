use thiserror::Error;

use crate::llm::LlmError;
use crate::tools::ToolError;

/// Errors surfaced by crew assembly and execution
#[derive(Debug, Error)]
pub enum CrewError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Output validation failed after {attempts} attempts: {message}")]
    Validation { attempts: usize, message: String },

    #[error("Invalid crew: {0}")]
    InvalidCrew(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
