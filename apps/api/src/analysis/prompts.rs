// Résumé analysis LLM prompt templates.

use crate::llm_client::prompts::{truncate_for_prompt, JSON_ONLY_INSTRUCTION};

/// Characters of each document sent to the model.
pub const MAX_DOCUMENT_CHARS: usize = 4000;

const ANALYSIS_INSTRUCTION: &str = "You are an expert resume analyzer. Analyze the following resume against the job description and provide a comprehensive analysis.";

const ANALYSIS_RESPONSE_FORMAT: &str = r#"Please provide a detailed analysis in the following JSON format:
{
  "jobFitScore": <number 0-100>,
  "analysis": "<detailed analysis text explaining how well the resume matches the job description>",
  "recommendations": "<numbered list of specific recommendations to improve the resume>",
  "matchedKeywords": ["keyword1", "keyword2", ...],
  "missingKeywords": ["keyword1", "keyword2", ...],
  "scoreDescription": "<brief description of the score>"
}

Focus on:
1. Skill alignment between resume and job requirements
2. Experience relevance
3. Keyword matching
4. Missing qualifications
5. Specific actionable recommendations

"#;

/// Document text is inserted in a single pass, so braces or placeholder-like
/// text inside a résumé is sent verbatim.
pub fn build_analysis_prompt(resume: &str, job_description: &str) -> String {
    let resume = truncate_for_prompt(resume, MAX_DOCUMENT_CHARS);
    let job_description = truncate_for_prompt(job_description, MAX_DOCUMENT_CHARS);
    format!(
        "{ANALYSIS_INSTRUCTION}\n\nRESUME:\n{resume}\n\nJOB DESCRIPTION:\n{job_description}\n\n{ANALYSIS_RESPONSE_FORMAT}{JSON_ONLY_INSTRUCTION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_documents() {
        let prompt = build_analysis_prompt("Rust engineer, 3 years", "Hiring a Go developer");
        assert!(prompt.contains("RESUME:\nRust engineer, 3 years"));
        assert!(prompt.contains("JOB DESCRIPTION:\nHiring a Go developer"));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_document_text_is_not_re_expanded() {
        let prompt = build_analysis_prompt("My notes {job_description}", "Hiring Go dev");
        assert_eq!(prompt.matches("Hiring Go dev").count(), 1);
        assert!(prompt.contains("RESUME:\nMy notes {job_description}\n"));
    }

    #[test]
    fn test_long_documents_are_truncated() {
        let resume = "r".repeat(MAX_DOCUMENT_CHARS + 50);
        let prompt = build_analysis_prompt(&resume, "jd");
        assert!(prompt.contains("...(truncated)"));
        assert!(!prompt.contains(&"r".repeat(MAX_DOCUMENT_CHARS + 1)));
    }
}
