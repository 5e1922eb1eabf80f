//! Local file read tool, used to hand a resume or similar document to an agent.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::{require_str, Tool, ToolDescription, ToolError};

const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024; // 1MB

pub struct FileReadTool {
    /// When set, the tool always reads this file and ignores the parameter
    fixed_path: Option<PathBuf>,
    max_file_size: u64,
}

impl Default for FileReadTool {
    fn default() -> Self {
        Self::new()
    }
}

impl FileReadTool {
    pub fn new() -> Self {
        Self {
            fixed_path: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            fixed_path: Some(path.into()),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    fn validate(path: &Path, max_size: u64) -> Result<u64, ToolError> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| ToolError::ExecutionFailed(format!("file not found: {}", path.display())))?;
        if !metadata.is_file() {
            return Err(ToolError::ExecutionFailed(format!(
                "path is not a file: {}",
                path.display()
            )));
        }
        if metadata.len() > max_size {
            return Err(ToolError::ExecutionFailed(format!(
                "file too large: {} bytes (max: {max_size})",
                metadata.len()
            )));
        }
        Ok(metadata.len())
    }
}

#[async_trait]
impl Tool for FileReadTool {
    fn describe(&self) -> ToolDescription {
        let description = match &self.fixed_path {
            Some(path) => format!("Read the contents of {}", path.display()),
            None => "Read the contents of a local file".to_string(),
        };
        let parameters = if self.fixed_path.is_some() {
            json!({"type": "object", "properties": {}, "additionalProperties": false})
        } else {
            json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path of the file to read"
                    }
                },
                "required": ["path"],
                "additionalProperties": false
            })
        };

        ToolDescription {
            name: "read_file".to_string(),
            description,
            parameters,
        }
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let path = match &self.fixed_path {
            Some(path) => path.clone(),
            None => PathBuf::from(require_str(parameters, "path")?),
        };

        let size = Self::validate(&path, self.max_file_size)?;
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ToolError::ExecutionFailed(format!("read failed: {e}")))?;

        Ok(json!({
            "path": path.display().to_string(),
            "size": size,
            "content": content
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_by_parameter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "resume body").unwrap();

        let tool = FileReadTool::new();
        let params = json!({"path": file.path().to_str().unwrap()});
        let result = tool.execute(&params).await.unwrap();
        assert!(result["content"].as_str().unwrap().contains("resume body"));
    }

    #[tokio::test]
    async fn fixed_path_ignores_parameters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pinned").unwrap();

        let tool = FileReadTool::for_path(file.path());
        let result = tool.execute(&json!({"path": "/nonexistent"})).await.unwrap();
        assert!(result["content"].as_str().unwrap().contains("pinned"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let tool = FileReadTool::new();
        let result = tool.execute(&json!({"path": "/no/such/file"})).await;
        assert!(matches!(result, Err(ToolError::ExecutionFailed(_))));
    }
}
