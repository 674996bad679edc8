//! Résumé analyzers: a pluggable, trait-based backend that scores a résumé
//! against a job description.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, chosen at startup:
//! `LlmResumeAnalyzer` when an API key is configured, else `KeywordResumeAnalyzer`.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::{normalize_report, score_description, AnalysisReport, MAX_KEYWORDS};
use crate::errors::AppError;
use crate::llm_client::{extract_json_object, CompletionOptions, LlmClient};

/// Keywords taken from the job description by the keyword analyzer.
pub const MAX_JD_KEYWORDS: usize = 30;

const ANALYSIS_COMPLETION: CompletionOptions = CompletionOptions {
    temperature: 0.7,
    max_tokens: 2000,
};

/// Characters of a non-JSON reply kept as the analysis text.
const RAW_ANALYSIS_CHARS: usize = 500;

const RECOVERED_RECOMMENDATIONS: &str =
    "1. Review the analysis above\n2. Improve keyword matching\n3. Enhance relevant experience";

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "been", "being", "both", "but", "by", "can", "could", "do", "does", "each",
    "etc", "for", "from", "has", "have", "how", "if", "in", "including", "into", "is", "it",
    "its", "job", "least", "like", "may", "more", "most", "must", "new", "not", "of", "on",
    "one", "or", "other", "our", "out", "over", "per", "plus", "role", "should", "so", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "up", "us", "using", "very", "was", "we", "well", "were", "what", "when",
    "where", "which", "while", "who", "will", "with", "within", "work", "would", "year",
    "years", "you", "your",
];

/// Implement this to swap analysis backends without touching the handler.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume: &str, job_description: &str)
        -> Result<AnalysisReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordResumeAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic analyzer with no network access.
///
/// Algorithm:
/// 1. Tokenise the JD, drop stopwords, numbers and one-letter tokens.
/// 2. Keep the `MAX_JD_KEYWORDS` most frequent tokens (ties by first appearance).
/// 3. score = matched / total × 100, where a keyword matches if it is a résumé token.
pub struct KeywordResumeAnalyzer;

#[async_trait]
impl ResumeAnalyzer for KeywordResumeAnalyzer {
    async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisReport, AppError> {
        Ok(keyword_report(resume, job_description))
    }
}

pub fn keyword_report(resume: &str, job_description: &str) -> AnalysisReport {
    let keywords = top_keywords(job_description, MAX_JD_KEYWORDS);

    if keywords.is_empty() {
        return AnalysisReport {
            job_fit_score: 0,
            analysis: "No keywords found in the job description, so the fit could not be scored."
                .to_string(),
            recommendations: "Upload a job description that lists the required skills."
                .to_string(),
            matched_keywords: vec![],
            missing_keywords: vec![],
            score_description: score_description(0).to_string(),
            analyzer: "keyword".to_string(),
        };
    }

    let resume_tokens: HashSet<String> = tokenize(resume).collect();
    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|kw| resume_tokens.contains(kw));

    let job_fit_score = ((matched.len() as f32 / keywords.len() as f32) * 100.0).round() as u8;

    let analysis = format!(
        "Your resume covers {} of the {} most frequent keywords in the job description.",
        matched.len(),
        keywords.len()
    );

    AnalysisReport {
        job_fit_score,
        analysis,
        recommendations: build_recommendation(job_fit_score, &missing),
        matched_keywords: matched.into_iter().take(MAX_KEYWORDS).collect(),
        missing_keywords: missing.into_iter().take(MAX_KEYWORDS).collect(),
        score_description: score_description(job_fit_score).to_string(),
        analyzer: "keyword".to_string(),
    }
}

/// Lowercased word tokens. `+`, `#` and `.` stay inside words so C++, C# and
/// Node.js survive.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|token| token.trim_matches('.').to_lowercase())
        .filter(|token| {
            token.chars().count() > 1
                && !token.chars().all(|c| c.is_ascii_digit() || c == '.')
                && !STOPWORDS.contains(&token.as_str())
        })
}

fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(text).enumerate() {
        counts.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _, _)| token)
        .collect()
}

fn build_recommendation(score: u8, missing: &[String]) -> String {
    let top_gaps: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();

    if score >= 80 {
        "1. Strong keyword coverage. Keep the most relevant experience near the top.".to_string()
    } else if score >= 60 {
        format!(
            "1. Mention these job keywords where you have the experience: {}.\n2. Quantify results for the matching skills.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "1. Significant gaps: {}.\n2. Tailor your summary and skills section to this role.\n3. Add projects that show the missing skills.",
            top_gaps.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmResumeAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Semantic analyzer backed by the chat-completions API. When the call
/// itself fails it falls back once to the keyword analyzer.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
    fallback: KeywordResumeAnalyzer,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: KeywordResumeAnalyzer,
        }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AnalysisReport, AppError> {
        let prompt = build_analysis_prompt(resume, job_description);

        match self.llm.complete(&prompt, ANALYSIS_COMPLETION).await {
            Ok(reply) => {
                info!("Résumé analysis received from {}", self.llm.model());
                Ok(report_from_reply(&reply))
            }
            Err(e) => {
                warn!("LLM résumé analysis failed, using keyword analyzer: {e}");
                self.fallback.analyze(resume, job_description).await
            }
        }
    }
}

/// Parses the model reply. Replies without a usable JSON object are salvaged
/// by pattern-matching a score out of the free text.
pub fn report_from_reply(reply: &str) -> AnalysisReport {
    let parsed = extract_json_object(reply)
        .and_then(|json| serde_json::from_str::<Value>(json).ok())
        .filter(Value::is_object);

    match parsed {
        Some(raw) => normalize_report(&raw, "llm"),
        None => {
            warn!("LLM analysis reply was not JSON; recovering score from text");
            normalize_report(&recover_from_text(reply), "llm")
        }
    }
}

fn recover_from_text(reply: &str) -> Value {
    static SCORE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = SCORE_PATTERNS.get_or_init(|| {
        [
            r#"(?i)jobFitScore["\s:]*(\d+)"#,
            r#"(?i)score["\s:]*(\d+)"#,
            r"(\d+)\s*/\s*100",
        ]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
    });

    let score = patterns
        .iter()
        .find_map(|re| re.captures(reply))
        .and_then(|caps| caps[1].parse::<u64>().ok());

    let text = reply.trim();
    let analysis = if text.is_empty() {
        "Analysis completed. See recommendations below.".to_string()
    } else {
        text.chars().take(RAW_ANALYSIS_CHARS).collect()
    };

    json!({
        "jobFitScore": score,
        "analysis": analysis,
        "recommendations": RECOVERED_RECOMMENDATIONS,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
