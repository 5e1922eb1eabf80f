use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_ENTRIES: usize = 50;

/// One remembered task completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub timestamp: DateTime<Utc>,
    pub agent_role: String,
    pub task_description: String,
    pub output: String,
}

/// Bounded transcript of task completions within one crew run
#[derive(Debug, Clone)]
pub struct SessionMemory {
    entries: Vec<SessionEntry>,
    max_entries: usize,
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMemory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a completed task; the oldest entry is dropped at capacity.
    /// A zero-capacity transcript records nothing.
    pub fn record(&mut self, agent_role: &str, task_description: &str, output: &str) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.entries.remove(0);
        }
        self.entries.push(SessionEntry {
            timestamp: Utc::now(),
            agent_role: agent_role.to_string(),
            task_description: task_description.to_string(),
            output: output.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the transcript as prompt context for the next agent
    pub fn as_context(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let rendered = self
            .entries
            .iter()
            .map(|e| format!("[{}]\n{}", e.agent_role, e.output))
            .collect::<Vec<_>>()
            .join("\n\n");
        Some(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_memory_yields_no_context() {
        let memory = SessionMemory::new();
        assert!(memory.as_context().is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn records_in_order() {
        let mut memory = SessionMemory::new();
        memory.record("Planner", "plan it", "the plan");
        memory.record("Writer", "write it", "the draft");

        let context = memory.as_context().unwrap();
        let planner_pos = context.find("[Planner]").unwrap();
        let writer_pos = context.find("[Writer]").unwrap();
        assert!(planner_pos < writer_pos);
        assert!(context.contains("the plan"));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut memory = SessionMemory::with_max_entries(0);
        memory.record("A", "t1", "first");
        assert!(memory.is_empty());
        assert!(memory.as_context().is_none());
    }

    #[test]
    fn drops_oldest_at_capacity() {
        let mut memory = SessionMemory::with_max_entries(2);
        memory.record("A", "t1", "first");
        memory.record("B", "t2", "second");
        memory.record("C", "t3", "third");

        assert_eq!(memory.len(), 2);
        let context = memory.as_context().unwrap();
        assert!(!context.contains("first"));
        assert!(context.contains("third"));
    }
}
