pub mod agent;
pub mod config;
pub mod crew;
pub mod crews;
pub mod error;
pub mod llm;
pub mod logging;
pub mod memory;
pub mod output;
pub mod task;
pub mod tools;

pub use agent::Agent;
pub use crew::{Crew, CrewOutput, Process};
pub use error::CrewError;
pub use llm::{LlmConfig, LlmHandle};
pub use task::{Task, TaskOutput};
