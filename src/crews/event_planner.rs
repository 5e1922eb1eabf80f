//! Event planning crew: a venue coordinator produces a typed JSON venue
//! record, then logistics and marketing run as one parallel stage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::crew::Crew;
use crate::error::CrewError;
use crate::llm::LlmHandle;
use crate::task::{JsonFieldType, Task};
use crate::tools::{Tool, WebSearchTool};

pub const VENUE_DETAILS_FILE: &str = "venue_details.json";
pub const MARKETING_REPORT_FILE: &str = "marketing_report.md";

/// Typed output contract for the venue task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetails {
    pub name: String,
    pub address: String,
    pub capacity: u32,
    pub booking_status: String,
}

impl VenueDetails {
    /// Read the venue record the crew wrote during kickoff
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CrewError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CrewError::Config(format!("invalid venue details: {e}")))
    }
}

/// Assemble the event planning crew: venue → (logistics ∥ marketing)
pub fn crew(llm: &LlmHandle, search: Option<Arc<WebSearchTool>>) -> Result<Crew, CrewError> {
    let shared_tools: Vec<Arc<dyn Tool>> = match search {
        Some(search) => vec![search],
        None => Vec::new(),
    };

    let venue_coordinator = Agent::new(
        "Venue Coordinator",
        "Identify an appropriate venue based on the event requirements.",
        "With a keen sense of space and logistics, you excel at finding and \
         securing the perfect venue, matching the event theme, size, and budget \
         constraints.",
        llm,
    )
    .with_tools(shared_tools.clone());

    let logistics_manager = Agent::new(
        "Logistics Manager",
        "Manage all logistics for the event, including catering and equipment.",
        "Organized and detail-oriented, you ensure that every logistical aspect \
         of the event, from catering to equipment setup, is flawlessly executed.",
        llm,
    )
    .with_tools(shared_tools.clone());

    let marketing_agent = Agent::new(
        "Marketing and Communications Agent",
        "Effectively market the event and communicate with participants.",
        "Creative and communicative, you craft compelling messages and engage \
         with potential attendees to maximize event exposure and participation.",
        llm,
    )
    .with_tools(shared_tools);

    let venue_task = Task::new(
        "Find a venue in {event_city} that meets the criteria for {event_topic}: \
         {event_description}. The venue should be a {venue_type}, hold at least \
         {expected_participants} participants, and fit within a budget of \
         {budget}. Target date: {tentative_date}.",
        "All the details of a specifically chosen venue you found to accommodate \
         the event.",
        &venue_coordinator,
    )
    .with_simple_json_output(vec![
        ("name", JsonFieldType::String),
        ("address", JsonFieldType::String),
        ("capacity", JsonFieldType::Number),
        ("booking_status", JsonFieldType::String),
    ])
    .with_output_file(VENUE_DETAILS_FILE);

    let logistics_task = Task::new(
        "Coordinate catering and equipment for an event with \
         {expected_participants} participants on {tentative_date} in \
         {event_city}. Stay within the overall budget of {budget}.",
        "Confirmation of all logistics arrangements including catering and \
         equipment setup, with a line-item cost estimate.",
        &logistics_manager,
    )
    .with_context(&[&venue_task])
    .with_async_execution();

    let marketing_task = Task::new(
        "Promote the {event_topic} ({event_description}) aiming to engage at \
         least {expected_participants} potential attendees in {event_city} \
         before {tentative_date}.",
        "Report on marketing activities and attendee engagement, formatted as \
         markdown.",
        &marketing_agent,
    )
    .with_context(&[&venue_task])
    .with_async_execution()
    .with_output_file(MARKETING_REPORT_FILE);

    Ok(Crew::new(
        vec![venue_coordinator, logistics_manager, marketing_agent],
        vec![venue_task, logistics_task, marketing_task],
    )?
    .with_memory(true))
}
