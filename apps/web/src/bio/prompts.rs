use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM;

/// System prompt for bio generation.
pub fn bio_system() -> String {
    format!(
        "You write short, friendly profile bios for a running-buddy app. {PLAIN_TEXT_SYSTEM}"
    )
}

/// Bio prompt template. Replace `{keywords}` before sending.
pub const BIO_PROMPT_TEMPLATE: &str = "Write a 1-2 sentence runner bio in first person \
    that naturally mentions these interests: {keywords}. \
    Keep it under 40 words, upbeat and specific.";

pub fn build_bio_prompt(keywords: &str) -> String {
    BIO_PROMPT_TEMPLATE.replace("{keywords}", keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_keywords() {
        let prompt = build_bio_prompt("trails, coffee");
        assert!(prompt.contains("trails, coffee"));
        assert!(!prompt.contains("{keywords}"));
    }

    #[test]
    fn test_system_prompt_forbids_markdown() {
        assert!(bio_system().contains("plain text"));
    }
}
