//! Session memory for a crew run.
//!
//! When a crew is assembled with the memory flag, every completed task's
//! description/output pair is recorded and surfaced to later agents whose
//! tasks declare no explicit context.

pub mod session;

pub use session::{SessionEntry, SessionMemory};
