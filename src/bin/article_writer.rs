//! Content writing crew CLI: plan → write → edit on a chosen topic.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crewline::config::AgentLibrary;
use crewline::crews::article_writer;
use crewline::llm::LlmHandle;
use crewline::output::{is_affirmative, prompt, render_markdown, write_result_file};

#[derive(Parser)]
#[command(name = "article-writer", about = "Write a blog article with a planner/writer/editor crew")]
struct Args {
    /// Topic to write about (prompted interactively when omitted)
    #[arg(long)]
    topic: Option<String>,

    /// Write the result to a markdown file without asking
    #[arg(long)]
    save: bool,

    /// Directory for saved results
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,

    /// Agent definition overrides
    #[arg(long, default_value = crewline::config::DEFAULT_AGENTS_FILE)]
    agents_file: PathBuf,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    crewline::logging::init(args.verbose)?;

    let interactive = args.topic.is_none();
    let topic = match args.topic {
        Some(topic) => topic,
        None => prompt("What topic do you wish to write?")?,
    };
    let save = args.save
        || (interactive && is_affirmative(&prompt("Write result to file? (y/n):")?));

    let llm = LlmHandle::from_env()?;
    let library = AgentLibrary::load(&args.agents_file)?;
    let crew = article_writer::crew(&llm, &library)?;

    let inputs = HashMap::from([("topic".to_string(), topic.clone())]);
    let result = crew.kickoff(inputs).await?;

    render_markdown(&result.raw);

    if save {
        let path = write_result_file(&args.output_dir, &topic, &result.raw)?;
        println!("\nSaved to: {}", path.display());
    }

    Ok(())
}
