// Placement Prep: AI-generated learning roadmaps with checklist progress.
// Generation goes through llm_client and falls back to static templates;
// every roadmap is enriched from the learning-resource catalog before it is stored.

pub mod enrich;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNTITLED_SECTION: &str = "Untitled Section";
pub const DEFAULT_RESOURCE_LABEL: &str = "Resource";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<RoadmapItem>,
}

/// Checklist completion summary shown next to a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl RoadmapProgress {
    pub fn of(sections: &[RoadmapSection]) -> Self {
        let items = sections.iter().flat_map(|s| s.items.iter());
        let (completed, total) =
            items.fold((0, 0), |(done, total), item| (done + item.completed as usize, total + 1));
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        RoadmapProgress {
            completed,
            total,
            percent,
        }
    }
}

/// Domains are matched exactly after trimming; the lowercase form is only
/// used for template and catalog lookups.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().to_string()
}

/// Whether `completed` flags from the input survive sanitising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedFlags {
    /// AI output: every item starts unchecked.
    Reset,
    /// Client progress updates.
    Keep,
}

/// Rebuilds sections from untrusted JSON (LLM output or a client PATCH body),
/// keeping only title, text, completion and resources.
pub fn sanitize_sections(raw: &[Value], flags: CompletedFlags) -> Vec<RoadmapSection> {
    raw.iter()
        .map(|section| {
            let title = loose_text(section.get("title"));
            RoadmapSection {
                title: if title.is_empty() {
                    UNTITLED_SECTION.to_string()
                } else {
                    title
                },
                items: section
                    .get("items")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| sanitize_item(item, flags))
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        })
        .collect()
}

fn sanitize_item(raw: &Value, flags: CompletedFlags) -> Option<RoadmapItem> {
    let item = match raw {
        Value::String(text) => RoadmapItem {
            text: text.trim().to_string(),
            completed: false,
            resources: vec![],
        },
        _ => RoadmapItem {
            text: loose_text(raw.get("text")),
            completed: flags == CompletedFlags::Keep && truthy(raw.get("completed")),
            resources: raw
                .get("resources")
                .and_then(Value::as_array)
                .map(|rs| rs.iter().filter_map(sanitize_resource).collect())
                .unwrap_or_default(),
        },
    };
    // Items without text cannot be shown as a checklist entry.
    (!item.text.is_empty()).then_some(item)
}

fn sanitize_resource(raw: &Value) -> Option<Resource> {
    let url = loose_text(raw.get("url"));
    if url.is_empty() {
        return None;
    }
    let label = loose_text(raw.get("label"));
    Some(Resource {
        label: if label.is_empty() {
            DEFAULT_RESOURCE_LABEL.to_string()
        } else {
            label
        },
        url,
    })
}

/// Lenient string coercion for model output: numbers and booleans are
/// stringified, containers and null count as empty.
fn loose_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
