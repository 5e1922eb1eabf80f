//! Sales outreach crew: profile a lead, then draft personalized outreach.
//! The profiler can search the web; the writer's sentiment tool keeps the
//! copy on a positive note.

use std::sync::Arc;

use crate::agent::Agent;
use crate::crew::Crew;
use crate::error::CrewError;
use crate::llm::LlmHandle;
use crate::task::Task;
use crate::tools::{SentimentAnalysisTool, Tool, WebSearchTool};

/// Assemble the outreach crew. `search` is injected so callers without a
/// Serper key can run the crew with profiling from model knowledge alone.
pub fn crew(llm: &LlmHandle, search: Option<Arc<WebSearchTool>>) -> Result<Crew, CrewError> {
    let mut profiler_tools: Vec<Arc<dyn Tool>> = Vec::new();
    if let Some(search) = search {
        profiler_tools.push(search);
    }

    let sales_rep = Agent::new(
        "Sales Representative",
        "Identify high-value leads that match our ideal customer profile.",
        "As a part of the dynamic sales team at Crewline, your mission is to \
         scour the digital landscape for potential leads. Armed with data-driven \
         insights, you analyze trends and interactions so your work lays the \
         groundwork for meaningful engagement with {lead_name}.",
        llm,
    )
    .with_tools(profiler_tools);

    let lead_sales_rep = Agent::new(
        "Lead Sales Representative",
        "Nurture leads with personalized, compelling communications.",
        "Within the vibrant ecosystem of Crewline's sales department, you stand \
         out as the bridge between potential clients and the solutions they need. \
         You craft engaging narratives that resonate with {lead_name}, converting \
         interest into action with a personal, positive touch.",
        llm,
    )
    .with_tools(vec![Arc::new(SentimentAnalysisTool::new())]);

    let lead_profiling_task = Task::new(
        "Conduct an in-depth analysis of {lead_name}, a company in the {industry} \
         sector. Compile findings on company background, key personnel, recent \
         milestones, and identified needs. Highlight potential areas where our \
         solutions can provide value and the role {key_decision_maker} \
         ({position}) plays in decisions.",
        "A comprehensive report on {lead_name}, including company background, key \
         personnel, recent milestones, and identified needs. Conclude with how \
         our solutions align with their goals.",
        &sales_rep,
    );

    let personalized_outreach_task = Task::new(
        "Using the insights from the lead profiling report on {lead_name}, craft a \
         personalized outreach campaign aimed at {key_decision_maker}, the \
         {position} of {lead_name}. The campaign should address their recent \
         {milestone} and how our solutions support their goals. Your tone should \
         be engaging, professional, and aligned with {lead_name}'s corporate \
         identity. Keep the sentiment positive throughout.",
        "A series of personalized email drafts tailored to {lead_name}, \
         specifically targeting {key_decision_maker}. Each draft should present a \
         compelling narrative connecting our solutions with their recent \
         achievements and future goals.",
        &lead_sales_rep,
    )
    .with_context(&[&lead_profiling_task]);

    Ok(Crew::new(
        vec![sales_rep, lead_sales_rep],
        vec![lead_profiling_task, personalized_outreach_task],
    )?
    .with_memory(true))
}
