use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::agent::Agent;
use crate::llm::TokenUsage;

// Enum to define different output format types
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    Text, // Free-form text output
    Json {
        schema: JsonSchema,
        strict: bool, // Whether to enforce strict validation (all fields required)
    },
}

// JSON Schema definition for validation
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonSchema {
    pub required_fields: Vec<JsonField>,
    pub optional_fields: Vec<JsonField>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonField {
    pub name: String,
    pub field_type: JsonFieldType,
    pub description: Option<String>,
}

impl JsonField {
    pub fn new(name: impl Into<String>, field_type: JsonFieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum JsonFieldType {
    String,
    Number,
    Boolean,
    Array(Box<JsonFieldType>), // Array of specific type
    Object,                    // Nested object (simplified for now)
}

/// Substitute `{placeholder}` occurrences with crew inputs.
///
/// Unknown placeholders are left untouched so a template can carry literal
/// braces that are not inputs.
pub fn interpolate(template: &str, inputs: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in inputs {
        result = result.replace(&format!("{{{key}}}"), value);
    }
    result
}

/// A prompt template bound to one agent, optionally depending on prior
/// tasks' outputs for context.
#[derive(Clone)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub expected_output: String,
    pub agent: Agent,
    /// Ids of earlier tasks whose outputs are injected into this prompt
    pub context: Vec<String>,
    pub output_format: OutputFormat,
    /// When set, the raw output is written here after the task completes
    pub output_file: Option<PathBuf>,
    /// Marks this task as part of a parallel stage; consecutive async tasks
    /// are executed together
    pub async_execution: bool,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: &Agent,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent: agent.clone(),
            context: Vec::new(),
            output_format: OutputFormat::Text, // Default to text
            output_file: None,
            async_execution: false,
        }
    }

    /// Declare the prior tasks whose outputs feed this prompt
    pub fn with_context(mut self, tasks: &[&Task]) -> Self {
        self.context = tasks.iter().map(|t| t.id.clone()).collect();
        self
    }

    pub fn with_output_file(mut self, path: impl AsRef<Path>) -> Self {
        self.output_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_async_execution(mut self) -> Self {
        self.async_execution = true;
        self
    }

    /// Require typed JSON output validated against a schema
    pub fn with_json_output(
        mut self,
        required_fields: Vec<JsonField>,
        optional_fields: Vec<JsonField>,
        strict: bool,
    ) -> Self {
        self.output_format = OutputFormat::Json {
            schema: JsonSchema {
                required_fields,
                optional_fields,
            },
            strict,
        };
        self
    }

    /// Shorthand for a strict JSON task with just field names and types
    pub fn with_simple_json_output(self, required_fields: Vec<(&str, JsonFieldType)>) -> Self {
        let fields = required_fields
            .into_iter()
            .map(|(name, field_type)| JsonField::new(name, field_type))
            .collect();
        self.with_json_output(fields, vec![], true)
    }

    /// Copy of this task with crew inputs substituted into its templates.
    /// The bound agent's role template is interpolated as well, so
    /// placeholders in goal/backstory reach the model filled in.
    pub fn interpolated(&self, inputs: &HashMap<String, String>) -> Task {
        let mut task = self.clone();
        task.description = interpolate(&self.description, inputs);
        task.expected_output = interpolate(&self.expected_output, inputs);
        task.agent = self.agent.interpolated(inputs);
        task
    }

    // Validate agent output against the expected format
    pub fn validate_output(&self, output: &str) -> Result<()> {
        match &self.output_format {
            OutputFormat::Text => {
                if output.trim().is_empty() {
                    return Err(anyhow!("Output is empty"));
                }
                Ok(())
            }
            OutputFormat::Json { schema, strict } => {
                self.validate_json_output(output, schema, *strict)
            }
        }
    }

    /// Strip a surrounding markdown code fence, if any, before JSON parsing
    pub fn strip_code_fence(output: &str) -> &str {
        let trimmed = output.trim();
        if trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() > 6 {
            let inner = &trimmed[3..trimmed.len() - 3];
            // drop an optional language label on the opening fence
            match inner.find('\n') {
                Some(pos) => inner[pos + 1..].trim(),
                None => inner.trim(),
            }
        } else {
            trimmed
        }
    }

    // JSON-specific validation
    fn validate_json_output(&self, output: &str, schema: &JsonSchema, strict: bool) -> Result<()> {
        let content = Self::strip_code_fence(output);
        let parsed: Value =
            serde_json::from_str(content).map_err(|e| anyhow!("Output is not valid JSON: {}", e))?;

        let obj = parsed
            .as_object()
            .ok_or_else(|| anyhow!("JSON output must be an object, got: {}", parsed))?;

        // Validate required fields
        for field in &schema.required_fields {
            if !obj.contains_key(&field.name) {
                return Err(anyhow!("Missing required field: '{}'", field.name));
            }
            self.validate_field_type(&obj[&field.name], &field.field_type, &field.name)?;
        }

        // Validate optional fields (if present)
        for field in &schema.optional_fields {
            if let Some(value) = obj.get(&field.name) {
                self.validate_field_type(value, &field.field_type, &field.name)?;
            }
        }

        // In strict mode, ensure no extra fields are present
        if strict {
            let expected_fields: std::collections::HashSet<&String> = schema
                .required_fields
                .iter()
                .chain(schema.optional_fields.iter())
                .map(|f| &f.name)
                .collect();

            for key in obj.keys() {
                if !expected_fields.contains(key) {
                    return Err(anyhow!("Unexpected field in strict mode: '{}'", key));
                }
            }
        }

        Ok(())
    }

    // Validate individual field types
    fn validate_field_type(
        &self,
        value: &Value,
        expected_type: &JsonFieldType,
        field_name: &str,
    ) -> Result<()> {
        match expected_type {
            JsonFieldType::String => {
                if !value.is_string() {
                    return Err(anyhow!(
                        "Field '{}' must be a string, got: {}",
                        field_name,
                        value
                    ));
                }
            }
            JsonFieldType::Number => {
                if !value.is_number() {
                    return Err(anyhow!(
                        "Field '{}' must be a number, got: {}",
                        field_name,
                        value
                    ));
                }
            }
            JsonFieldType::Boolean => {
                if !value.is_boolean() {
                    return Err(anyhow!(
                        "Field '{}' must be a boolean, got: {}",
                        field_name,
                        value
                    ));
                }
            }
            JsonFieldType::Array(element_type) => {
                let arr = value.as_array().ok_or_else(|| {
                    anyhow!("Field '{}' must be an array, got: {}", field_name, value)
                })?;
                for (i, element) in arr.iter().enumerate() {
                    self.validate_field_type(element, element_type, &format!("{field_name}[{i}]"))?;
                }
            }
            JsonFieldType::Object => {
                if !value.is_object() {
                    return Err(anyhow!(
                        "Field '{}' must be an object, got: {}",
                        field_name,
                        value
                    ));
                }
            }
        }
        Ok(())
    }

    // Generate a prompt section describing the expected output format
    pub fn get_format_prompt(&self) -> String {
        match &self.output_format {
            OutputFormat::Text => String::new(),
            OutputFormat::Json { schema, strict } => {
                let mut prompt =
                    "You must respond with valid JSON in the following format:\n\n".to_string();
                prompt.push_str("{\n");

                for field in &schema.required_fields {
                    prompt.push_str(&format!(
                        "  \"{}\": <{}>,  // REQUIRED{}\n",
                        field.name,
                        type_to_string(&field.field_type),
                        field
                            .description
                            .as_ref()
                            .map(|d| format!(" - {d}"))
                            .unwrap_or_default()
                    ));
                }
                for field in &schema.optional_fields {
                    prompt.push_str(&format!(
                        "  \"{}\": <{}>,  // OPTIONAL{}\n",
                        field.name,
                        type_to_string(&field.field_type),
                        field
                            .description
                            .as_ref()
                            .map(|d| format!(" - {d}"))
                            .unwrap_or_default()
                    ));
                }

                prompt.push_str("}\n\n");
                if *strict {
                    prompt.push_str(
                        "IMPORTANT: Only include the specified fields. No additional fields are allowed.\n",
                    );
                }
                prompt.push_str(
                    "Respond with raw JSON only, without markdown code fences, and follow this exact structure.",
                );
                prompt
            }
        }
    }
}

// Helper to convert JsonFieldType to string representation
fn type_to_string(field_type: &JsonFieldType) -> String {
    match field_type {
        JsonFieldType::String => "string".to_string(),
        JsonFieldType::Number => "number".to_string(),
        JsonFieldType::Boolean => "boolean".to_string(),
        JsonFieldType::Array(element_type) => format!("array of {}", type_to_string(element_type)),
        JsonFieldType::Object => "object".to_string(),
    }
}

/// Result of executing one task
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskOutput {
    pub task_id: String,
    /// Interpolated description the agent was given
    pub description: String,
    /// The agent's textual output
    pub raw: String,
    pub usage: TokenUsage,
    pub tools_used: Vec<String>,
    pub execution_time_ms: u64,
}
