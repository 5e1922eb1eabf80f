//! Sales outreach crew CLI: profile a lead, then draft personalized emails.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use crewline::crews::customer_outreach;
use crewline::llm::LlmHandle;
use crewline::output::render_markdown;
use crewline::tools::WebSearchTool;

#[derive(Parser)]
#[command(name = "customer-outreach", about = "Profile a lead and draft personalized outreach")]
struct Args {
    #[arg(long, default_value = "Defenstack")]
    lead_name: String,

    #[arg(long, default_value = "Cybersecurity")]
    industry: String,

    #[arg(long, default_value = "Gabriel Adeola")]
    key_decision_maker: String,

    #[arg(long, default_value = "CEO")]
    position: String,

    #[arg(long, default_value = "product launch")]
    milestone: String,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    crewline::logging::init(args.verbose)?;

    // Search is optional: without a Serper key the profiler works from
    // model knowledge alone.
    let search = match WebSearchTool::from_env() {
        Ok(tool) => Some(Arc::new(tool)),
        Err(e) => {
            warn!(error = %e, "web search disabled");
            None
        }
    };

    let llm = LlmHandle::from_env()?;
    let crew = customer_outreach::crew(&llm, search)?;

    let inputs = HashMap::from([
        ("lead_name".to_string(), args.lead_name),
        ("industry".to_string(), args.industry),
        ("key_decision_maker".to_string(), args.key_decision_maker),
        ("position".to_string(), args.position),
        ("milestone".to_string(), args.milestone),
    ]);
    let result = crew.kickoff(inputs).await?;

    render_markdown(&result.raw);
    Ok(())
}
