//! Customer support crew: a support rep resolves an inquiry, then a QA
//! specialist reviews the draft reply. Session memory is enabled so the
//! reviewer sees the rep's full exchange.

use std::sync::Arc;

use crate::agent::Agent;
use crate::crew::Crew;
use crate::error::CrewError;
use crate::llm::LlmHandle;
use crate::task::Task;
use crate::tools::ScrapeWebsiteTool;

/// Assemble the support crew. `docs_url` pins the rep's scrape tool to the
/// product documentation page relevant to the inquiry.
pub fn crew(llm: &LlmHandle, docs_url: &str) -> Result<Crew, CrewError> {
    let support_rep = Agent::new(
        "Senior Support Representative",
        "Be the most friendly and helpful support representative on your team.",
        "You work at Crewline and are now providing support to {customer}, \
         a super important customer for your company. You need to make sure \
         that you provide the best support: give complete, accurate answers \
         and make no assumptions.",
        llm,
    )
    .with_tools(vec![Arc::new(ScrapeWebsiteTool::for_url(docs_url))]);

    let quality_reviewer = Agent::new(
        "Support Quality Assurance Specialist",
        "Get recognition for providing the best support quality assurance on your team.",
        "You work at Crewline and are now reviewing the response your team \
         drafted for {customer}'s inquiry. You need to make sure the answer is \
         complete, accurate, friendly, and leaves no question unanswered.",
        llm,
    );

    let inquiry_task = Task::new(
        "{customer} just reached out with a super important ask:\n{inquiry}\n\n\
         {person} from {customer} is the one that reached out. \
         Make sure to use everything you know to provide the best support possible. \
         You must strive to provide a complete and accurate response to the \
         customer's inquiry.",
        "A detailed, informative response to the customer's inquiry that addresses \
         all aspects of their question. The response should include references to \
         everything you used to find the answer, including external data or \
         solutions. Maintain a helpful and friendly tone throughout.",
        &support_rep,
    );

    let quality_assurance_task = Task::new(
        "Review the response drafted by the Senior Support Representative for \
         {customer}'s inquiry. Ensure that the answer is comprehensive, accurate, \
         and adheres to the high-quality standards expected for customer support. \
         Verify that all parts of the customer's inquiry have been addressed \
         thoroughly, with a helpful and friendly tone. Check for references and \
         sources used to find the information.",
        "A final, detailed, and informative response ready to be sent to the \
         customer. This response should fully address the customer's inquiry, \
         incorporating all relevant feedback and improvements. \
         Maintain a professional and friendly tone throughout.",
        &quality_reviewer,
    )
    .with_context(&[&inquiry_task]);

    Ok(Crew::new(
        vec![support_rep, quality_reviewer],
        vec![inquiry_task, quality_assurance_task],
    )?
    .with_memory(true))
}
