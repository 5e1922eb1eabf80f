//! Web search tool backed by the Serper API.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::tools::{require_str, Tool, ToolDescription, ToolError};

const SERPER_URL: &str = "https://google.serper.dev/search";
const DEFAULT_RESULTS: usize = 10;

pub struct WebSearchTool {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
}

impl WebSearchTool {
    /// Reads `SERPER_API_KEY` from the environment
    pub fn from_env() -> Result<Self, ToolError> {
        let api_key = std::env::var("SERPER_API_KEY").map_err(|_| {
            ToolError::NotConfigured("SERPER_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            max_results: DEFAULT_RESULTS,
        }
    }

    fn build_payload(query: &str, num_results: usize) -> Value {
        json!({
            "q": query,
            "num": num_results,
            "gl": "us",
            "hl": "en"
        })
    }

    /// Flatten Serper's organic results down to title/url/snippet records
    fn parse_results(search_result: &Value, num_results: usize) -> Vec<Value> {
        let mut formatted = Vec::new();

        if let Some(organic) = search_result.get("organic").and_then(|o| o.as_array()) {
            for result in organic.iter().take(num_results) {
                if let (Some(title), Some(link)) = (
                    result.get("title").and_then(|t| t.as_str()),
                    result.get("link").and_then(|l| l.as_str()),
                ) {
                    let snippet = result.get("snippet").and_then(|s| s.as_str()).unwrap_or("");
                    formatted.push(json!({
                        "title": title,
                        "url": link,
                        "snippet": snippet
                    }));
                }
            }
        }

        formatted
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: "web_search".to_string(),
            description: "Search the web for current information".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "num_results": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 20,
                        "default": DEFAULT_RESULTS
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let query = require_str(parameters, "query")?;
        let num_results = parameters
            .get("num_results")
            .and_then(|n| n.as_u64())
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_RESULTS)
            .min(self.max_results);

        debug!(query, num_results, "running web search");

        let response = self
            .client
            .post(SERPER_URL)
            .header("X-API-KEY", &self.api_key)
            .json(&Self::build_payload(query, num_results))
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "search API returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(json!({
            "query": query,
            "results": Self::parse_results(&body, num_results)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_organic_results() {
        let body = json!({
            "organic": [
                {"title": "First", "link": "https://a.example", "snippet": "one"},
                {"title": "Second", "link": "https://b.example"},
                {"no_title": true}
            ]
        });

        let results = WebSearchTool::parse_results(&body, 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["title"], "First");
        assert_eq!(results[1]["snippet"], "");
    }

    #[test]
    fn respects_result_limit() {
        let body = json!({
            "organic": [
                {"title": "a", "link": "u"},
                {"title": "b", "link": "u"},
                {"title": "c", "link": "u"}
            ]
        });
        assert_eq!(WebSearchTool::parse_results(&body, 2).len(), 2);
    }

    #[tokio::test]
    async fn requires_query_parameter() {
        let tool = WebSearchTool::new("key".to_string());
        let result = tool.execute(&json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    }
}
