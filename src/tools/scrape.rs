//! Website scraping tool: fetch a page and reduce it to readable text.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::tools::{require_str, Tool, ToolDescription, ToolError};

const MAX_TEXT_LEN: usize = 16 * 1024;

pub struct ScrapeWebsiteTool {
    client: reqwest::Client,
    /// When set, the tool always scrapes this URL and ignores the parameter.
    /// Used to pin a support agent to one documentation page.
    fixed_url: Option<String>,
}

impl Default for ScrapeWebsiteTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapeWebsiteTool {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            fixed_url: None,
        }
    }

    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            fixed_url: Some(url.into()),
        }
    }

    /// ASCII case-insensitive prefix check, safe on any byte offset
    fn starts_with_ci(haystack: &str, prefix: &str) -> bool {
        haystack.len() >= prefix.len()
            && haystack.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }

    /// Strip tags, scripts, and styles from an HTML document, collapsing
    /// whitespace. Deliberately small: enough to hand page text to a model,
    /// not a general extractor.
    fn strip_tags(html: &str) -> String {
        let mut text = String::with_capacity(html.len() / 4);
        let mut chars = html.char_indices();
        let mut skip_until: Option<&str> = None;
        let mut in_tag = false;
        let mut last_was_space = true;

        while let Some((i, c)) = chars.next() {
            if let Some(closing) = skip_until {
                if Self::starts_with_ci(&html[i..], closing) {
                    // consume the rest of the closing tag (ASCII, one byte each)
                    for _ in 0..closing.len() - 1 {
                        chars.next();
                    }
                    skip_until = None;
                    in_tag = false;
                }
                continue;
            }

            if c == '<' {
                if Self::starts_with_ci(&html[i..], "<script") {
                    skip_until = Some("</script>");
                } else if Self::starts_with_ci(&html[i..], "<style") {
                    skip_until = Some("</style>");
                } else {
                    in_tag = true;
                }
                continue;
            }
            if in_tag {
                if c == '>' {
                    in_tag = false;
                    if !last_was_space {
                        text.push(' ');
                        last_was_space = true;
                    }
                }
                continue;
            }

            if c.is_whitespace() {
                if !last_was_space {
                    text.push(' ');
                    last_was_space = true;
                }
            } else {
                text.push(c);
                last_was_space = false;
            }
        }

        let mut trimmed = text.trim().to_string();
        if trimmed.len() > MAX_TEXT_LEN {
            let mut cut = MAX_TEXT_LEN;
            while !trimmed.is_char_boundary(cut) {
                cut -= 1;
            }
            trimmed.truncate(cut);
        }
        trimmed
    }
}

#[async_trait]
impl Tool for ScrapeWebsiteTool {
    fn describe(&self) -> ToolDescription {
        let description = match &self.fixed_url {
            Some(url) => format!("Read the content of the page at {url}"),
            None => "Fetch a web page and return its text content".to_string(),
        };
        let parameters = if self.fixed_url.is_some() {
            json!({"type": "object", "properties": {}, "additionalProperties": false})
        } else {
            json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "URL of the page to scrape"
                    }
                },
                "required": ["url"],
                "additionalProperties": false
            })
        };

        ToolDescription {
            name: "scrape_website".to_string(),
            description,
            parameters,
        }
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let url = match &self.fixed_url {
            Some(url) => url.as_str(),
            None => require_str(parameters, "url")?,
        };

        debug!(url, "scraping page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "page returned HTTP {}",
                response.status()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(json!({
            "url": url,
            "text": Self::strip_tags(&html)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<html><body><h1>Title</h1>\n<p>Hello   <b>world</b></p></body></html>";
        assert_eq!(
            ScrapeWebsiteTool::strip_tags(html),
            "Title Hello world".to_string()
        );
    }

    #[test]
    fn drops_script_and_style_blocks() {
        let html = "<p>keep</p><script>var x = '<p>no</p>';</script><style>p{}</style><p>this</p>";
        assert_eq!(ScrapeWebsiteTool::strip_tags(html), "keep this");
    }

    #[test]
    fn fixed_url_tool_takes_no_parameters() {
        let tool = ScrapeWebsiteTool::for_url("https://docs.example.com");
        let desc = tool.describe();
        assert!(desc.description.contains("docs.example.com"));
        assert!(desc.parameters["properties"]
            .as_object()
            .unwrap()
            .is_empty());
    }
}
