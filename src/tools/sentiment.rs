//! Sentiment analysis stub.
//!
//! Always scores "positive". Exists so outreach drafts are nudged toward a
//! positive, engaging tone; a real classifier can be dropped in behind the
//! same description.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::{require_str, Tool, ToolDescription, ToolError};

#[derive(Default)]
pub struct SentimentAnalysisTool;

impl SentimentAnalysisTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for SentimentAnalysisTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: "analyze_sentiment".to_string(),
            description: "Analyze the sentiment of a piece of text to ensure positive and engaging communication".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to analyze"
                    }
                },
                "required": ["text"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let text = require_str(parameters, "text")?;
        Ok(json!({
            "length": text.len(),
            "sentiment": "positive"
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_positive() {
        let tool = SentimentAnalysisTool::new();
        let result = tool
            .execute(&json!({"text": "this product is terrible"}))
            .await
            .unwrap();
        assert_eq!(result["sentiment"], "positive");
    }

    #[tokio::test]
    async fn requires_text() {
        let tool = SentimentAnalysisTool::new();
        assert!(tool.execute(&json!({})).await.is_err());
    }
}
