//! YAML config loading for agent definitions.
//!
//! `config/agents.yaml` maps an agent key to a role/goal/backstory record.
//! Crews fall back to their built-in definitions when the file (or the key)
//! is absent, so the YAML is purely an override surface.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CrewError;

pub const DEFAULT_AGENTS_FILE: &str = "config/agents.yaml";

/// Declarative agent definition loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentConfig {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }
}

/// Agent definitions keyed by name, with built-in fallbacks
#[derive(Debug, Clone, Default)]
pub struct AgentLibrary {
    agents: HashMap<String, AgentConfig>,
}

impl AgentLibrary {
    /// Load from a YAML file. A missing file yields an empty library;
    /// malformed YAML is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CrewError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let agents: HashMap<String, AgentConfig> = serde_yaml::from_str(&content)
            .map_err(|e| CrewError::Config(format!("invalid agents file {}: {e}", path.display())))?;
        Ok(Self { agents })
    }

    /// Load the default agents file from the working directory
    pub fn load_default() -> Result<Self, CrewError> {
        Self::load(DEFAULT_AGENTS_FILE)
    }

    pub fn get(&self, key: &str) -> Option<&AgentConfig> {
        self.agents.get(key)
    }

    /// The YAML override for `key`, or the built-in fallback
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a AgentConfig) -> &'a AgentConfig {
        self.agents.get(key).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_empty_library() {
        let library = AgentLibrary::load("/no/such/agents.yaml").unwrap();
        assert!(library.is_empty());
    }

    #[test]
    fn loads_agent_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "planner:\n  role: Content Planner\n  goal: Plan content on {{topic}}\n  backstory: You plan articles."
        )
        .unwrap();

        let library = AgentLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 1);
        let planner = library.get("planner").unwrap();
        assert_eq!(planner.role, "Content Planner");
        assert!(planner.goal.contains("{topic}"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "planner: [not, a, record").unwrap();
        assert!(AgentLibrary::load(file.path()).is_err());
    }

    #[test]
    fn fallback_applies_when_key_is_absent() {
        let library = AgentLibrary::default();
        let fallback = AgentConfig::new("Editor", "Polish drafts", "You edit.");
        assert_eq!(library.get_or("editor", &fallback), &fallback);
    }
}
