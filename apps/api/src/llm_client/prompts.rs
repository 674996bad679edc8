// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON, no additional text.";

/// Cuts `text` to at most `max_chars` characters, marking the cut.
/// Counts characters rather than bytes so multi-byte text is never split mid-codepoint.
pub fn truncate_for_prompt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{} ...(truncated)", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_for_prompt("short resume", 4000), "short resume");
    }

    #[test]
    fn test_truncate_marks_cut() {
        let text = "a".repeat(10);
        assert_eq!(truncate_for_prompt(&text, 4), "aaaa ...(truncated)");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "résumé résumé";
        assert_eq!(truncate_for_prompt(text, 6), "résumé ...(truncated)");
    }
}
