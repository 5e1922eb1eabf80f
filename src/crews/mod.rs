//! The shipped crew definitions: declarative agent/task templates wired into
//! sequential or trivially-parallel pipelines.
//!
//! Each module exposes a `crew(...)` constructor returning a ready-to-kickoff
//! [`crate::Crew`]; placeholders in the task templates are filled from the
//! inputs passed to `kickoff`.

pub mod article_writer;
pub mod customer_outreach;
pub mod customer_support;
pub mod event_planner;
pub mod job_application;
