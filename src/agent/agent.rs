use std::sync::Arc;

use crate::llm::LlmHandle;
use crate::tools::Tool;

/// Core Agent structure: a role/goal/backstory template bound to a shared
/// language-model handle and an optional tool set.
#[derive(Clone)]
pub struct Agent {
    pub id: String,

    // Role template
    pub role: String,
    pub goal: String,
    pub backstory: String,

    // Behavior flags
    pub verbose: bool,
    /// Carried for parity with the orchestration surface; the shipped crews
    /// never enable it
    pub allow_delegation: bool,

    // Capabilities
    pub tools: Vec<Arc<dyn Tool>>,

    // Shared LLM handle
    pub llm: LlmHandle,
}

impl Agent {
    /// Look up one of this agent's tools by its described name
    pub fn find_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.describe().name == name)
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("tools", &self.tools.len())
            .field("model", &self.llm.config.model)
            .finish()
    }
}
