//! Résumé vs. job description analysis.
//!
//! Uploaded documents are turned into text by `extract`, then scored by a
//! `ResumeAnalyzer` from `scoring`. Whatever the backend returns is passed
//! through `normalize_report` so clients always get the same shape.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod scoring;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_KEYWORDS: usize = 20;
pub const DEFAULT_SCORE: u8 = 50;
pub const DEFAULT_ANALYSIS: &str =
    "Analysis completed. Please review your resume against the job requirements.";
pub const DEFAULT_RECOMMENDATIONS: &str =
    "Consider tailoring your resume to better match the job description.";

/// Result returned by `POST /api/resume/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub job_fit_score: u8, // 0 – 100
    pub analysis: String,
    pub recommendations: String,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub score_description: String,
    pub analyzer: String, // "llm" | "keyword"
}

pub fn score_description(score: u8) -> &'static str {
    if score >= 80 {
        "Good match"
    } else {
        "Needs improvement"
    }
}

/// Coerces loosely shaped analyzer output into an `AnalysisReport`.
pub fn normalize_report(raw: &Value, analyzer: &str) -> AnalysisReport {
    let job_fit_score = normalize_score(raw.get("jobFitScore"));

    let analysis = non_blank_text(raw.get("analysis"))
        .unwrap_or_else(|| DEFAULT_ANALYSIS.to_string());

    let recommendations = match raw.get("recommendations") {
        Some(Value::Array(items)) => {
            let lines: Vec<String> = items
                .iter()
                .filter_map(|item| non_blank_text(Some(item)))
                .enumerate()
                .map(|(i, line)| format!("{}. {line}", i + 1))
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        other => non_blank_text(other),
    }
    .unwrap_or_else(|| DEFAULT_RECOMMENDATIONS.to_string());

    let score_description = non_blank_text(raw.get("scoreDescription"))
        .unwrap_or_else(|| score_description(job_fit_score).to_string());

    AnalysisReport {
        job_fit_score,
        analysis,
        recommendations,
        matched_keywords: keyword_list(raw.get("matchedKeywords")),
        missing_keywords: keyword_list(raw.get("missingKeywords")),
        score_description,
        analyzer: analyzer.to_string(),
    }
}

/// Numbers and numeric strings are clamped to 0–100 and rounded.
/// Anything else becomes `DEFAULT_SCORE`.
fn normalize_score(value: Option<&Value>) -> u8 {
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match score {
        Some(s) if s.is_finite() => s.clamp(0.0, 100.0).round() as u8,
        _ => DEFAULT_SCORE,
    }
}

fn non_blank_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// String-like entries only, at most `MAX_KEYWORDS`.
fn keyword_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| non_blank_text(Some(item)))
                .take(MAX_KEYWORDS)
                .collect()
        })
        .unwrap_or_default()
}
