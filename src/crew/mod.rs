pub mod crew;

pub use crew::{Crew, CrewOutput, Process};

#[cfg(test)]
mod tests;
