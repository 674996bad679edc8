//! Roadmap generation: one LLM attempt, then the static template.

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::{CompletionOptions, LlmClient};
use crate::roadmap::fallback::fallback_roadmap;
use crate::roadmap::prompts::build_roadmap_prompt;
use crate::roadmap::{sanitize_sections, CompletedFlags, RoadmapSection};

const ROADMAP_COMPLETION: CompletionOptions = CompletionOptions {
    temperature: 0.7,
    max_tokens: 1200,
};

/// Where a generated roadmap came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapSource {
    Llm,
    Fallback,
}

/// Generates roadmap sections for `domain`. Never fails: any LLM problem
/// (not configured, call error, unusable output) yields the static template.
pub async fn generate_sections(
    domain: &str,
    llm: Option<&LlmClient>,
) -> (Vec<RoadmapSection>, RoadmapSource) {
    let Some(llm) = llm else {
        info!("No LLM configured; using fallback roadmap for '{domain}'");
        return (fallback_roadmap(domain), RoadmapSource::Fallback);
    };

    let output = match llm
        .complete_json(&build_roadmap_prompt(domain), ROADMAP_COMPLETION)
        .await
    {
        Ok(output) => output,
        Err(e) => {
            warn!("AI roadmap generation failed for '{domain}', using fallback: {e}");
            return (fallback_roadmap(domain), RoadmapSource::Fallback);
        }
    };

    match sections_from_ai_output(&output) {
        Some(sections) => {
            info!(
                "Generated AI roadmap for '{domain}' with {} sections",
                sections.len()
            );
            (sections, RoadmapSource::Llm)
        }
        None => {
            warn!("AI roadmap for '{domain}' had no usable sections, using fallback");
            (fallback_roadmap(domain), RoadmapSource::Fallback)
        }
    }
}

/// Reads `{"sections": [...]}` from model output. `None` when the shape is
/// wrong or nothing survives sanitising.
pub fn sections_from_ai_output(output: &Value) -> Option<Vec<RoadmapSection>> {
    let raw = output.get("sections")?.as_array()?;
    let sections = sanitize_sections(raw, CompletedFlags::Reset);
    (!sections.is_empty()).then_some(sections)
}
