//! Customer support crew CLI: resolve an inquiry, then QA-review the reply.

use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;

use crewline::crews::customer_support;
use crewline::llm::LlmHandle;
use crewline::output::{prompt, render_markdown};

#[derive(Parser)]
#[command(name = "customer-support", about = "Answer a customer inquiry with a support/QA crew")]
struct Args {
    /// Customer (company) name
    #[arg(long)]
    customer: Option<String>,

    /// First name of the person reaching out
    #[arg(long)]
    person: Option<String>,

    /// The inquiry text
    #[arg(long)]
    inquiry: Option<String>,

    /// Documentation page the support rep may consult
    #[arg(long, env = "SUPPORT_DOCS_URL", default_value = "https://docs.crewline.dev/getting-started")]
    docs_url: String,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    crewline::logging::init(args.verbose)?;

    let customer = match args.customer {
        Some(customer) => customer,
        None => prompt("Please enter customer ID:")?,
    };
    let person = match args.person {
        Some(person) => person,
        None => prompt("Please enter your first name:")?,
    };
    let inquiry = match args.inquiry {
        Some(inquiry) => inquiry,
        None => prompt("How can I help you?:")?,
    };

    let llm = LlmHandle::from_env()?;
    let crew = customer_support::crew(&llm, &args.docs_url)?;

    let inputs = HashMap::from([
        ("customer".to_string(), customer),
        ("person".to_string(), person),
        ("inquiry".to_string(), inquiry),
    ]);
    let result = crew.kickoff(inputs).await?;

    render_markdown(&result.raw);
    Ok(())
}
