//! Attaches catalog resources to roadmap items by topic match.

use crate::models::roadmap::LearningResourceRow;
use crate::roadmap::{Resource, RoadmapSection, DEFAULT_RESOURCE_LABEL};

/// Domain values in the catalog that apply to every roadmap.
pub const GLOBAL_DOMAINS: [&str; 2] = ["any", "all"];

/// Adds every catalog resource whose topic appears in an item's text.
///
/// Matching is case-insensitive substring search. Each item's resource list
/// is deduplicated by URL: the item's own resources keep their order and
/// the first position of a URL, a later duplicate only refreshes the label,
/// and catalog matches are appended only for URLs not seen yet.
pub fn enrich_sections(
    sections: Vec<RoadmapSection>,
    catalog: &[LearningResourceRow],
) -> Vec<RoadmapSection> {
    if catalog.is_empty() {
        return sections;
    }

    let prepared: Vec<(Vec<String>, &LearningResourceRow)> = catalog
        .iter()
        .map(|entry| {
            let topics = entry
                .topics
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect::<Vec<String>>();
            (topics, entry)
        })
        .filter(|(topics, _)| !topics.is_empty())
        .collect();

    sections
        .into_iter()
        .map(|mut section| {
            for item in &mut section.items {
                let lower = item.text.to_lowercase();

                let mut merged: Vec<Resource> = Vec::with_capacity(item.resources.len());
                for resource in item.resources.drain(..) {
                    push_unique(&mut merged, resource, true);
                }

                for (topics, entry) in &prepared {
                    if topics.iter().any(|topic| lower.contains(topic.as_str())) {
                        let label = if entry.label.trim().is_empty() {
                            DEFAULT_RESOURCE_LABEL.to_string()
                        } else {
                            entry.label.clone()
                        };
                        push_unique(
                            &mut merged,
                            Resource {
                                label,
                                url: entry.url.clone(),
                            },
                            false,
                        );
                    }
                }

                item.resources = merged;
            }
            section
        })
        .collect()
}

fn push_unique(resources: &mut Vec<Resource>, resource: Resource, replace_label: bool) {
    if resource.url.is_empty() {
        return;
    }
    match resources.iter_mut().find(|r| r.url == resource.url) {
        Some(existing) if replace_label => existing.label = resource.label,
        Some(_) => {}
        None => resources.push(resource),
    }
}
