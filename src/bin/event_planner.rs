//! Event planning crew CLI: choose a venue, then run logistics and marketing
//! in parallel. The venue record lands in venue_details.json.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use crewline::crews::event_planner::{self, VenueDetails, VENUE_DETAILS_FILE};
use crewline::llm::LlmHandle;
use crewline::output::render_markdown;
use crewline::tools::WebSearchTool;

#[derive(Parser)]
#[command(name = "event-planner", about = "Plan an event: venue, logistics, and marketing")]
struct Args {
    #[arg(long, default_value = "Tech Innovation Conference")]
    event_topic: String,

    #[arg(
        long,
        default_value = "A gathering of tech innovators and industry leaders to explore future technologies."
    )]
    event_description: String,

    #[arg(long, default_value = "Lewis Center OH")]
    event_city: String,

    #[arg(long, default_value = "2025-09-20")]
    tentative_date: String,

    #[arg(long, default_value_t = 50)]
    expected_participants: u32,

    #[arg(long, default_value_t = 5000)]
    budget: u32,

    #[arg(long, default_value = "Conference Hall")]
    venue_type: String,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    crewline::logging::init(args.verbose)?;

    let search = match WebSearchTool::from_env() {
        Ok(tool) => Some(Arc::new(tool)),
        Err(e) => {
            warn!(error = %e, "web search disabled");
            None
        }
    };

    let llm = LlmHandle::from_env()?;
    let crew = event_planner::crew(&llm, search)?;

    let inputs = HashMap::from([
        ("event_topic".to_string(), args.event_topic),
        ("event_description".to_string(), args.event_description),
        ("event_city".to_string(), args.event_city),
        ("tentative_date".to_string(), args.tentative_date),
        (
            "expected_participants".to_string(),
            args.expected_participants.to_string(),
        ),
        ("budget".to_string(), args.budget.to_string()),
        ("venue_type".to_string(), args.venue_type),
    ]);
    let result = crew.kickoff(inputs).await?;

    render_markdown(&result.raw);

    // The venue task wrote its typed record during kickoff; show it back.
    let venue = VenueDetails::from_file(VENUE_DETAILS_FILE)?;
    println!("\nChosen venue:");
    println!("  {} ({} seats)", venue.name, venue.capacity);
    println!("  {}", venue.address);
    println!("  booking: {}", venue.booking_status);

    Ok(())
}
