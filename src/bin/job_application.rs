//! Job application crew CLI: research + profile in parallel, then resume
//! tailoring and interview prep. Outputs land in tailored_resume.md and
//! interview_materials.md.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::warn;

use crewline::crews::job_application::{
    self, INTERVIEW_MATERIALS_FILE, TAILORED_RESUME_FILE,
};
use crewline::llm::LlmHandle;
use crewline::output::render_markdown;
use crewline::tools::WebSearchTool;

#[derive(Parser)]
#[command(name = "job-application", about = "Tailor a resume and prep interview materials for a job posting")]
struct Args {
    /// URL of the job posting to target
    #[arg(long)]
    job_posting_url: String,

    /// Candidate's GitHub profile URL
    #[arg(long)]
    github_url: String,

    /// Short personal write-up describing the candidate
    #[arg(long)]
    personal_writeup: String,

    /// Path to the candidate's current resume
    #[arg(long, default_value = "resume.md")]
    resume: PathBuf,

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
    let crew = job_application::crew(&llm, &args.resume, search)?;

    let inputs = HashMap::from([
        ("job_posting_url".to_string(), args.job_posting_url),
        ("github_url".to_string(), args.github_url),
        ("personal_writeup".to_string(), args.personal_writeup),
    ]);
    crew.kickoff(inputs).await?;

    for file in [TAILORED_RESUME_FILE, INTERVIEW_MATERIALS_FILE] {
        println!("\n{}\n", format!("=== {file} ===").bold());
        render_markdown(&std::fs::read_to_string(file)?);
    }

    Ok(())
}
