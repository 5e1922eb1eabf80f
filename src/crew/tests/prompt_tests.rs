use std::sync::Arc;

use super::test_utils::{test_agent, test_handle, MockProvider};
use crate::task::{JsonFieldType, Task};
use crate::tools::SentimentAnalysisTool;

#[test]
fn system_prompt_carries_role_template() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Content Planner", &handle);

    let prompt = agent.build_system_prompt();
    assert!(prompt.contains("You are Content Planner."));
    assert!(prompt.contains("Backstory of Content Planner"));
    assert!(prompt.contains("Your personal goal is: Goal of Content Planner"));
    // no tools, no tool instructions
    assert!(!prompt.contains("access to tools"));
}

#[test]
fn system_prompt_mentions_tools_when_present() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Rep", &handle)
        .with_tools(vec![Arc::new(SentimentAnalysisTool::new())]);

    assert!(agent.build_system_prompt().contains("access to tools"));
}

#[test]
fn task_prompt_embeds_description_and_criteria() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Writer", &handle);
    let task = Task::new("Write the article", "A polished draft", &agent);

    let prompt = agent.build_task_prompt(&task, None);
    assert!(prompt.contains("Current Task: Write the article"));
    assert!(prompt.contains("expected criteria for your final answer: A polished draft"));
    assert!(!prompt.contains("context you're working with"));
}

#[test]
fn task_prompt_injects_context() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Writer", &handle);
    let task = Task::new("Write the article", "A polished draft", &agent);

    let prompt = agent.build_task_prompt(&task, Some("the plan from earlier"));
    let context_pos = prompt.find("the plan from earlier").unwrap();
    let criteria_pos = prompt.find("expected criteria").unwrap();
    assert!(context_pos < criteria_pos, "context precedes the criteria");
}

#[test]
fn task_prompt_appends_json_contract() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Coordinator", &handle);
    let task = Task::new("Pick a venue", "Venue details", &agent)
        .with_simple_json_output(vec![("name", JsonFieldType::String)]);

    let prompt = agent.build_task_prompt(&task, None);
    assert!(prompt.contains("valid JSON"));
    assert!(prompt.contains("\"name\": <string>"));
}
