use std::collections::{HashMap, HashSet};
use std::path::Path;

use futures::future::try_join_all;
use tracing::{error, info};

use crate::agent::Agent;
use crate::error::CrewError;
use crate::llm::TokenUsage;
use crate::memory::SessionMemory;
use crate::task::{OutputFormat, Task, TaskOutput};

/// Execution semantics for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Process {
    /// Tasks run in declaration order; consecutive tasks marked for async
    /// execution form one parallel stage
    #[default]
    Sequential,
}

/// An ordered collection of tasks and their agents, executed end-to-end
/// given a dictionary of input substitutions.
pub struct Crew {
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
    pub process: Process,
    pub memory: bool,
    pub verbose: bool,
}

/// Result of a full crew run
#[derive(Debug, Clone)]
pub struct CrewOutput {
    /// The final task's textual output
    pub raw: String,
    /// Every task's output, in execution order
    pub task_outputs: Vec<TaskOutput>,
}

impl CrewOutput {
    /// Aggregate token usage across all tasks
    pub fn usage(&self) -> TokenUsage {
        let mut total = TokenUsage::default();
        for output in &self.task_outputs {
            total.accumulate(&output.usage);
        }
        total
    }
}

impl Crew {
    /// Assemble a crew, validating task/agent wiring up front
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>) -> Result<Self, CrewError> {
        Self::validate(&agents, &tasks)?;
        Ok(Self {
            agents,
            tasks,
            process: Process::Sequential,
            memory: false,
            verbose: false,
        })
    }

    pub fn with_process(mut self, process: Process) -> Self {
        self.process = process;
        self
    }

    /// Enable the shared session transcript across tasks
    pub fn with_memory(mut self, memory: bool) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Every task's agent must be a crew member, and a task's context may
    /// reference only earlier tasks: the dependency graph is a forward-only
    /// chain, never a cycle.
    fn validate(agents: &[Agent], tasks: &[Task]) -> Result<(), CrewError> {
        if tasks.is_empty() {
            return Err(CrewError::InvalidCrew("crew has no tasks".to_string()));
        }

        let member_ids: HashSet<&str> = agents.iter().map(|a| a.id.as_str()).collect();
        let mut seen_tasks: HashSet<&str> = HashSet::new();

        for (index, task) in tasks.iter().enumerate() {
            if !member_ids.contains(task.agent.id.as_str()) {
                return Err(CrewError::InvalidCrew(format!(
                    "task #{index} is bound to agent '{}' which is not a crew member",
                    task.agent.role
                )));
            }
            for context_id in &task.context {
                if !seen_tasks.contains(context_id.as_str()) {
                    return Err(CrewError::InvalidCrew(format!(
                        "task #{index} references a context task that does not precede it"
                    )));
                }
            }
            seen_tasks.insert(task.id.as_str());
        }

        Ok(())
    }

    /// Execute the crew with the given input substitutions.
    ///
    /// A failing task aborts the run; the error is logged here and handed
    /// back to the caller.
    pub async fn kickoff(
        &self,
        inputs: HashMap<String, String>,
    ) -> Result<CrewOutput, CrewError> {
        let result = self.run(inputs).await;
        if let Err(e) = &result {
            error!(error = %e, "crew run failed");
        }
        result
    }

    async fn run(&self, inputs: HashMap<String, String>) -> Result<CrewOutput, CrewError> {
        let tasks: Vec<Task> = self.tasks.iter().map(|t| t.interpolated(&inputs)).collect();

        let mut completed: HashMap<String, TaskOutput> = HashMap::new();
        let mut ordered_outputs: Vec<TaskOutput> = Vec::new();
        let mut session = SessionMemory::new();

        let mut index = 0;
        while index < tasks.len() {
            let stage_end = Self::stage_end(&tasks, index);
            let stage = &tasks[index..stage_end];

            if self.verbose && stage.len() > 1 {
                info!(tasks = stage.len(), "running parallel stage");
            }

            // Context is snapshotted before the stage starts, so tasks in
            // one parallel stage never observe each other's output.
            let stage_futures = stage.iter().map(|task| {
                let context = self.context_for(task, &completed, &session);
                async move { task.agent.execute(task, context.as_deref()).await }
            });
            let stage_outputs = try_join_all(stage_futures).await?;

            for (task, output) in stage.iter().zip(stage_outputs) {
                info!(
                    role = %task.agent.role,
                    task_id = %task.id,
                    elapsed_ms = output.execution_time_ms,
                    "task completed"
                );
                if let Some(path) = &task.output_file {
                    Self::write_output_file(task, path, &output)?;
                }
                if self.memory {
                    session.record(&task.agent.role, &task.description, &output.raw);
                }
                completed.insert(task.id.clone(), output.clone());
                ordered_outputs.push(output);
            }

            index = stage_end;
        }

        let raw = ordered_outputs
            .last()
            .map(|o| o.raw.clone())
            .unwrap_or_default();

        Ok(CrewOutput {
            raw,
            task_outputs: ordered_outputs,
        })
    }

    /// A stage is either one synchronous task or the maximal run of
    /// consecutive async tasks starting at `index`
    fn stage_end(tasks: &[Task], index: usize) -> usize {
        if !tasks[index].async_execution {
            return index + 1;
        }
        let mut end = index;
        while end < tasks.len() && tasks[end].async_execution {
            end += 1;
        }
        end
    }

    /// Explicitly declared context wins; otherwise the session transcript is
    /// injected when memory is enabled
    fn context_for(
        &self,
        task: &Task,
        completed: &HashMap<String, TaskOutput>,
        session: &SessionMemory,
    ) -> Option<String> {
        if !task.context.is_empty() {
            let parts: Vec<&str> = task
                .context
                .iter()
                .filter_map(|id| completed.get(id))
                .map(|o| o.raw.as_str())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n\n----------\n\n"))
            }
        } else if self.memory {
            session.as_context()
        } else {
            None
        }
    }

    /// Persist a task's output. JSON tasks are pretty-printed after code
    /// fence stripping; everything else is written raw.
    fn write_output_file(task: &Task, path: &Path, output: &TaskOutput) -> Result<(), CrewError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let body = match &task.output_format {
            OutputFormat::Json { .. } => {
                let content = Task::strip_code_fence(&output.raw);
                match serde_json::from_str::<serde_json::Value>(content) {
                    Ok(value) => serde_json::to_string_pretty(&value)
                        .unwrap_or_else(|_| content.to_string()),
                    // validation already passed; keep whatever we got
                    Err(_) => content.to_string(),
                }
            }
            OutputFormat::Text => output.raw.clone(),
        };

        std::fs::write(path, body)?;
        info!(path = %path.display(), "task output written");
        Ok(())
    }
}
