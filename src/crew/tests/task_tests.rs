use std::collections::HashMap;

use super::test_utils::{test_agent, test_handle, MockProvider};
use crate::task::{interpolate, JsonFieldType, Task};

fn sample_task(description: &str) -> Task {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = test_agent("Planner", &handle);
    Task::new(description, "Some expected output on {topic}", &agent)
}

#[test]
fn interpolate_substitutes_known_placeholders() {
    let inputs = HashMap::from([
        ("topic".to_string(), "Rust".to_string()),
        ("city".to_string(), "Berlin".to_string()),
    ]);
    assert_eq!(
        interpolate("Write about {topic} in {city}", &inputs),
        "Write about Rust in Berlin"
    );
}

#[test]
fn interpolate_leaves_unknown_placeholders() {
    let inputs = HashMap::from([("topic".to_string(), "Rust".to_string())]);
    assert_eq!(
        interpolate("{topic} and {unknown}", &inputs),
        "Rust and {unknown}"
    );
}

#[test]
fn interpolated_task_covers_both_templates() {
    let task = sample_task("Plan content on {topic}");
    let inputs = HashMap::from([("topic".to_string(), "AI agents".to_string())]);

    let interpolated = task.interpolated(&inputs);
    assert_eq!(interpolated.description, "Plan content on AI agents");
    assert_eq!(interpolated.expected_output, "Some expected output on AI agents");
    // the original template is untouched
    assert_eq!(task.description, "Plan content on {topic}");
}

#[test]
fn interpolated_task_covers_agent_template() {
    let handle = test_handle(MockProvider::with_contents(&[]));
    let agent = crate::agent::Agent::new(
        "Planner",
        "Plan content on {topic}",
        "You plan articles about {topic}.",
        &handle,
    );
    let task = Task::new("plan it", "a plan", &agent);
    let inputs = HashMap::from([("topic".to_string(), "Rust".to_string())]);

    let interpolated = task.interpolated(&inputs);
    assert_eq!(interpolated.agent.goal, "Plan content on Rust");
    assert_eq!(interpolated.agent.backstory, "You plan articles about Rust.");
    // the original agent template is untouched
    assert_eq!(task.agent.goal, "Plan content on {topic}");
}

#[test]
fn text_output_rejects_empty() {
    let task = sample_task("anything");
    assert!(task.validate_output("   \n ").is_err());
    assert!(task.validate_output("fine").is_ok());
}

#[test]
fn json_output_validates_schema() {
    let task = sample_task("venue").with_simple_json_output(vec![
        ("name", JsonFieldType::String),
        ("capacity", JsonFieldType::Number),
    ]);

    assert!(task
        .validate_output(r#"{"name": "Hall", "capacity": 100}"#)
        .is_ok());

    // missing field
    assert!(task.validate_output(r#"{"name": "Hall"}"#).is_err());
    // wrong type
    assert!(task
        .validate_output(r#"{"name": "Hall", "capacity": "big"}"#)
        .is_err());
    // strict mode rejects extras
    assert!(task
        .validate_output(r#"{"name": "Hall", "capacity": 1, "extra": true}"#)
        .is_err());
    // not even JSON
    assert!(task.validate_output("the venue is nice").is_err());
}

#[test]
fn json_output_accepts_fenced_payload() {
    let task = sample_task("venue")
        .with_simple_json_output(vec![("name", JsonFieldType::String)]);

    let fenced = "```json\n{\"name\": \"Hall\"}\n```";
    assert!(task.validate_output(fenced).is_ok());
}

#[test]
fn strip_code_fence_handles_variants() {
    assert_eq!(Task::strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    assert_eq!(
        Task::strip_code_fence("```json\n{\"a\":1}\n```"),
        "{\"a\":1}"
    );
    assert_eq!(Task::strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn format_prompt_describes_fields() {
    let task = sample_task("venue").with_simple_json_output(vec![
        ("name", JsonFieldType::String),
        ("capacity", JsonFieldType::Number),
    ]);

    let prompt = task.get_format_prompt();
    assert!(prompt.contains("\"name\": <string>"));
    assert!(prompt.contains("\"capacity\": <number>"));
    assert!(prompt.contains("No additional fields"));

    // plain text tasks add no format section
    assert!(sample_task("plain").get_format_prompt().is_empty());
}

#[test]
fn context_wiring_collects_task_ids() {
    let first = sample_task("first");
    let second = sample_task("second");
    let third = sample_task("third").with_context(&[&first, &second]);

    assert_eq!(third.context, vec![first.id.clone(), second.id.clone()]);
}
