pub mod task;

pub use task::{
    interpolate, JsonField, JsonFieldType, JsonSchema, OutputFormat, Task, TaskOutput,
};
