//! Job application crew: research the posting and profile the candidate in
//! parallel, then tailor the resume and prepare interview materials.

use std::path::Path;
use std::sync::Arc;

use crate::agent::Agent;
use crate::crew::Crew;
use crate::error::CrewError;
use crate::llm::LlmHandle;
use crate::task::Task;
use crate::tools::{FileReadTool, ScrapeWebsiteTool, Tool, WebSearchTool};

pub const TAILORED_RESUME_FILE: &str = "tailored_resume.md";
pub const INTERVIEW_MATERIALS_FILE: &str = "interview_materials.md";

/// Assemble the job application crew.
///
/// `resume_path` is handed to every agent as a pinned file-read tool;
/// scraping covers the posting and profile URLs; `search` is optional.
pub fn crew(
    llm: &LlmHandle,
    resume_path: &Path,
    search: Option<Arc<WebSearchTool>>,
) -> Result<Crew, CrewError> {
    let mut shared_tools: Vec<Arc<dyn Tool>> = vec![
        Arc::new(ScrapeWebsiteTool::new()),
        Arc::new(FileReadTool::for_path(resume_path)),
    ];
    if let Some(search) = search {
        shared_tools.push(search);
    }

    let researcher = Agent::new(
        "Tech Job Researcher",
        "Do amazing analysis on job postings to help job applicants stand out.",
        "As a job researcher, your prowess in navigating and extracting critical \
         information from job postings is unmatched. Your skills help pinpoint \
         the necessary qualifications and skills sought by employers, forming the \
         foundation for effective application tailoring.",
        llm,
    )
    .with_tools(shared_tools.clone());

    let profiler = Agent::new(
        "Personal Profiler for Engineers",
        "Do incredible research on job applicants to help them stand out in the job market.",
        "Equipped with analytical prowess, you dissect and synthesize information \
         from diverse sources to craft comprehensive personal and professional \
         profiles, laying the groundwork for personalized resume enhancements.",
        llm,
    )
    .with_tools(shared_tools.clone());

    let resume_strategist = Agent::new(
        "Resume Strategist for Engineers",
        "Find the best ways to make a resume stand out in the job market.",
        "With a strategic mind and an eye for detail, you excel at refining \
         resumes to highlight the most relevant skills and experiences, ensuring \
         they resonate perfectly with the job's requirements.",
        llm,
    )
    .with_tools(shared_tools.clone());

    let interview_preparer = Agent::new(
        "Engineering Interview Preparer",
        "Create interview questions and talking points based on the resume and job requirements.",
        "Your role is crucial in anticipating the dynamics of interviews. With \
         your ability to formulate key questions and talking points, you prepare \
         candidates for success, ensuring they can confidently address all \
         aspects of the job they are applying for.",
        llm,
    )
    .with_tools(shared_tools);

    let research_task = Task::new(
        "Analyze the job posting URL provided ({job_posting_url}) to extract key \
         skills, experiences, and qualifications required. Use the tools to \
         gather content and identify and categorize the requirements.",
        "A structured list of job requirements, including necessary skills, \
         qualifications, and experiences.",
        &researcher,
    )
    .with_async_execution();

    let profile_task = Task::new(
        "Compile a detailed personal and professional profile using the GitHub \
         ({github_url}) URL and the personal write-up ({personal_writeup}). \
         Utilize tools to extract and synthesize information from these sources.",
        "A comprehensive profile document that includes skills, project \
         experiences, contributions, interests, and communication style.",
        &profiler,
    )
    .with_async_execution();

    let resume_strategy_task = Task::new(
        "Using the profile and job requirements obtained from previous tasks, \
         tailor the resume to highlight the most relevant areas. Employ tools to \
         adjust and enhance the resume content. Make sure this is the best resume \
         ever but don't make up any information. Update every section, including \
         the initial summary, work experience, skills, and education, to better \
         reflect the candidate's abilities and how they match the job posting.",
        "An updated resume that effectively highlights the candidate's \
         qualifications and experiences relevant to the job.",
        &resume_strategist,
    )
    .with_context(&[&research_task, &profile_task])
    .with_output_file(TAILORED_RESUME_FILE);

    let interview_preparation_task = Task::new(
        "Create a set of potential interview questions and talking points based \
         on the tailored resume and job requirements. Utilize tools to generate \
         relevant questions and discussion points. Make sure to use these \
         questions and talking points to help the candidate highlight the main \
         points of the resume and how it matches the job posting.",
        "A document containing key questions and talking points that the \
         candidate should prepare for the initial interview.",
        &interview_preparer,
    )
    .with_context(&[&research_task, &profile_task, &resume_strategy_task])
    .with_output_file(INTERVIEW_MATERIALS_FILE);

    Crew::new(
        vec![researcher, profiler, resume_strategist, interview_preparer],
        vec![
            research_task,
            profile_task,
            resume_strategy_task,
            interview_preparation_task,
        ],
    )
}
