//! Content writing crew: planner → writer → editor over a `{topic}` input.

use crate::agent::Agent;
use crate::config::{AgentConfig, AgentLibrary};
use crate::crew::Crew;
use crate::error::CrewError;
use crate::llm::LlmHandle;
use crate::task::Task;

fn planner_defaults() -> AgentConfig {
    AgentConfig::new(
        "Content Planner",
        "Plan engaging and factually accurate content on {topic}.",
        "You're planning a blog article about {topic}. \
         You gather trustworthy info, outline key sections, and surface data/sources \
         so the audience can learn and make informed decisions. \
         Your output guides the Content Writer.",
    )
}

fn writer_defaults() -> AgentConfig {
    AgentConfig::new(
        "Content Writer",
        "Write a clear, insightful article on {topic} using the planner's outline.",
        "You transform the planner's outline and sources into a readable, SEO-friendly draft. \
         You clearly separate opinion from fact and cite supporting info when relevant.",
    )
}

fn editor_defaults() -> AgentConfig {
    AgentConfig::new(
        "Editor",
        "Polish the draft for accuracy, clarity, tone, and style.",
        "You fact-check, improve flow, ensure balanced viewpoints, and align with brand voice. \
         You remove ambiguity and fix grammar and structure.",
    )
}

/// Agents for the content workflow, honoring YAML overrides
pub fn agents(llm: &LlmHandle, library: &AgentLibrary) -> (Agent, Agent, Agent) {
    let planner = Agent::from_config(library.get_or("planner", &planner_defaults()), llm);
    let writer = Agent::from_config(library.get_or("writer", &writer_defaults()), llm);
    let editor = Agent::from_config(library.get_or("editor", &editor_defaults()), llm);
    (planner, writer, editor)
}

/// Assemble the content writing crew: plan → write → edit
pub fn crew(llm: &LlmHandle, library: &AgentLibrary) -> Result<Crew, CrewError> {
    let (planner, writer, editor) = agents(llm, library);

    let plan_task = Task::new(
        "1) Prioritize the latest trends, key players, and noteworthy news on {topic}.\n\
         2) Identify the target audience and their interests/pain points.\n\
         3) Develop a detailed content outline (intro, key points, call to action).\n\
         4) Include SEO keywords and relevant data/sources (links if available).",
        "A comprehensive content plan with: outline, audience analysis, \
         SEO keywords, and a sources list.",
        &planner,
    );

    let write_task = Task::new(
        "Using the content plan, draft a compelling blog post on {topic}.\n\
         - Incorporate SEO keywords naturally.\n\
         - Use clear section headings/subtitles.\n\
         - Structure: engaging introduction, insightful body, crisp conclusion.\n\
         - Proofread for grammar and brand voice alignment.",
        "A well-written Markdown blog post, publication-ready. \
         Each section should have 2-3 paragraphs.",
        &writer,
    )
    .with_context(&[&plan_task]);

    let edit_task = Task::new(
        "Edit the draft for clarity, grammar, factual accuracy, and brand voice. \
         Tighten phrasing and fix any structural issues.",
        "A polished Markdown article, publication-ready; \
         each section with 2-3 cohesive paragraphs.",
        &editor,
    )
    .with_context(&[&write_task]);

    Crew::new(
        vec![planner, writer, editor],
        vec![plan_task, write_task, edit_task],
    )
}
