use crate::agent::agent::Agent;
use crate::llm::ChatMessage;
use crate::task::Task;

impl Agent {
    /// Build initial messages for a task turn
    pub fn build_initial_messages(&self, task: &Task, context: Option<&str>) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.build_system_prompt()),
            ChatMessage::user(self.build_task_prompt(task, context)),
        ]
    }

    /// System prompt assembled from the role template
    pub fn build_system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are {role}. {backstory}\nYour personal goal is: {goal}",
            role = self.role,
            backstory = self.backstory,
            goal = self.goal,
        );
        if self.has_tools() {
            prompt.push_str(
                "\nYou have access to tools. Use them when they help you complete the task; \
                 otherwise answer directly.",
            );
        }
        prompt
    }

    /// Task prompt: description, prior-task context, and output contract
    pub fn build_task_prompt(&self, task: &Task, context: Option<&str>) -> String {
        let mut prompt = format!("Current Task: {}", task.description);

        if let Some(context) = context {
            if !context.is_empty() {
                prompt.push_str("\n\nThis is the context you're working with:\n");
                prompt.push_str(context);
            }
        }

        prompt.push_str(&format!(
            "\n\nThis is the expected criteria for your final answer: {}",
            task.expected_output
        ));

        let format_prompt = task.get_format_prompt();
        if !format_prompt.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&format_prompt);
        }

        prompt
    }
}
