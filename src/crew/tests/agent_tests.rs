use std::sync::Arc;

use super::test_utils::{test_agent, test_handle, MockProvider, MockTurn};
use crate::error::CrewError;
use crate::llm::ChatRole;
use crate::task::{JsonFieldType, Task};
use crate::tools::SentimentAnalysisTool;

#[tokio::test]
async fn execute_returns_content_and_usage() {
    let provider = MockProvider::with_contents(&["the plan"]);
    let handle = test_handle(provider.clone());
    let agent = test_agent("Planner", &handle);
    let task = Task::new("plan it", "a plan", &agent);

    let output = agent.execute(&task, None).await.unwrap();
    assert_eq!(output.raw, "the plan");
    assert_eq!(output.task_id, task.id);
    assert_eq!(output.usage.total_tokens, 15);
    assert!(output.tools_used.is_empty());
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn execute_dispatches_tool_calls() {
    let provider = MockProvider::scripted(vec![
        MockTurn::ToolCall {
            name: "analyze_sentiment".to_string(),
            arguments: r#"{"text": "great product"}"#.to_string(),
        },
        MockTurn::Content("positive outreach draft".to_string()),
    ]);
    let handle = test_handle(provider.clone());
    let agent = test_agent("Rep", &handle)
        .with_tools(vec![Arc::new(SentimentAnalysisTool::new())]);
    let task = Task::new("draft outreach", "an email", &agent);

    let output = agent.execute(&task, None).await.unwrap();
    assert_eq!(output.raw, "positive outreach draft");
    assert_eq!(output.tools_used, vec!["analyze_sentiment".to_string()]);
    // two completions: tool round plus the final answer
    assert_eq!(provider.request_count(), 2);
    // the second request carries the tool result back to the model
    assert!(provider.request_text(1).contains("positive"));
}

#[tokio::test]
async fn unknown_tool_feeds_error_back_to_model() {
    let provider = MockProvider::scripted(vec![
        MockTurn::ToolCall {
            name: "no_such_tool".to_string(),
            arguments: "{}".to_string(),
        },
        MockTurn::Content("recovered".to_string()),
    ]);
    let handle = test_handle(provider.clone());
    let agent = test_agent("Rep", &handle);
    let task = Task::new("do a thing", "a thing", &agent);

    let output = agent.execute(&task, None).await.unwrap();
    assert_eq!(output.raw, "recovered");
    assert!(provider.request_text(1).contains("unknown tool"));
}

#[tokio::test]
async fn invalid_output_triggers_correction_retry() {
    let provider = MockProvider::with_contents(&[
        "not json at all",
        r#"{"name": "Hall"}"#,
    ]);
    let handle = test_handle(provider.clone());
    let agent = test_agent("Coordinator", &handle);
    let task = Task::new("pick venue", "venue record", &agent)
        .with_simple_json_output(vec![("name", JsonFieldType::String)]);

    let output = agent.execute(&task, None).await.unwrap();
    assert_eq!(output.raw, r#"{"name": "Hall"}"#);
    assert_eq!(provider.request_count(), 2);
    assert!(provider
        .request_text(1)
        .contains("Your previous response was invalid"));

    // the retry conversation carries the rejected response as an assistant turn
    let requests = provider.requests.lock().unwrap();
    assert!(requests[1].messages.iter().any(|m| {
        matches!(m.role, ChatRole::Assistant) && m.content.as_deref() == Some("not json at all")
    }));
}

#[tokio::test]
async fn validation_gives_up_after_bounded_attempts() {
    let provider = MockProvider::with_contents(&["bad", "still bad", "nope"]);
    let handle = test_handle(provider.clone());
    let agent = test_agent("Coordinator", &handle);
    let task = Task::new("pick venue", "venue record", &agent)
        .with_simple_json_output(vec![("name", JsonFieldType::String)]);

    let result = agent.execute(&task, None).await;
    match result {
        Err(CrewError::Validation { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(provider.request_count(), 3);
}
