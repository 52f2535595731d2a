// Cross-cutting prompt fragments. Feature-specific prompts live next to the
// feature (see bio::prompts).

/// System prompt fragment that keeps completions to plain prose.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with plain text only. \
    Do NOT use markdown, headings, bullet points, quotes or emoji. \
    Do NOT include explanations or apologies.";
