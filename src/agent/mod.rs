pub mod agent;
pub mod agent_constructors;
pub mod agent_execution;
pub mod agent_prompts;

// Re-export main types for easier access
pub use agent::Agent;
