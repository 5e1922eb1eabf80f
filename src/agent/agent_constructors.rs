use std::collections::HashMap;
use std::sync::Arc;

use crate::agent::agent::Agent;
use crate::config::AgentConfig;
use crate::llm::LlmHandle;
use crate::task::interpolate;
use crate::tools::Tool;

impl Agent {
    /// Create a new basic Agent
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
        llm: &LlmHandle,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            verbose: false,
            allow_delegation: false,
            tools: Vec::new(),
            llm: llm.clone(),
        }
    }

    /// Create an Agent from a YAML-loaded config record
    pub fn from_config(config: &AgentConfig, llm: &LlmHandle) -> Self {
        Self::new(&config.role, &config.goal, &config.backstory, llm)
    }

    /// Copy of this agent with crew inputs substituted into its role template.
    /// Role, goal, and backstory may all carry `{placeholder}`s.
    pub fn interpolated(&self, inputs: &HashMap<String, String>) -> Self {
        let mut agent = self.clone();
        agent.role = interpolate(&self.role, inputs);
        agent.goal = interpolate(&self.goal, inputs);
        agent.backstory = interpolate(&self.backstory, inputs);
        agent
    }

    pub fn with_tools(mut self, tools: Vec<Arc<dyn Tool>>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_allow_delegation(mut self, allow_delegation: bool) -> Self {
        self.allow_delegation = allow_delegation;
        self
    }
}
