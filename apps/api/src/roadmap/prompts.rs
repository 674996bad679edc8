// Placement roadmap LLM prompt templates.

pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert career mentor.
Generate a beginner-friendly roadmap to land an entry-level job in the domain: "{domain}".

Return STRICTLY valid JSON in this exact format, nothing else:
{
  "sections": [
    {
      "title": "Section title",
      "items": [
        {
          "text": "Checklist item 1 (short, actionable)",
          "resources": [
            { "label": "Resource Name", "url": "https://..." }
          ]
        },
        {
          "text": "Checklist item 2",
          "resources": [
            { "label": "Another Resource", "url": "https://..." }
          ]
        }
      ]
    }
  ]
}

Sections must cover:
- Fundamentals to learn
- Core technical topics
- Important tools & technologies
- Interview-focused topics
- Best practices and recommended learning order.

Keep items short, actionable, and suitable for a student."#;

pub fn build_roadmap_prompt(domain: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE.replace("{domain}", domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_domain_once() {
        let prompt = build_roadmap_prompt("Cloud / DevOps");
        assert!(prompt.contains("in the domain: \"Cloud / DevOps\""));
        assert!(!prompt.contains("{domain}"));
    }
}
