//! Bio Generator — remote completion with a deterministic template fallback.
//!
//! `BioOutcome` records which path produced the text so callers and tests can
//! tell "no key configured" apart from "the call failed".

use tracing::{info, warn};

use crate::bio::prompts::{bio_system, build_bio_prompt};
use crate::llm_client::LlmClient;

/// Joins keywords in the fallback bio.
pub const SEPARATOR: &str = " · ";

#[derive(Debug, Clone, PartialEq)]
pub enum BioOutcome {
    /// Text returned by the remote model, trimmed.
    Generated(String),
    /// No API key configured; template text.
    NoCredential(String),
    /// The remote call failed; template text plus the failure reason.
    CallFailed { text: String, reason: String },
}

impl BioOutcome {
    pub fn text(&self) -> &str {
        match self {
            BioOutcome::Generated(text) | BioOutcome::NoCredential(text) => text,
            BioOutcome::CallFailed { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            BioOutcome::Generated(text) | BioOutcome::NoCredential(text) => text,
            BioOutcome::CallFailed { text, .. } => text,
        }
    }

    /// Short label for logs: "generated" | "no_credential" | "call_failed".
    pub fn source(&self) -> &'static str {
        match self {
            BioOutcome::Generated(_) => "generated",
            BioOutcome::NoCredential(_) => "no_credential",
            BioOutcome::CallFailed { .. } => "call_failed",
        }
    }
}

#[derive(Clone)]
pub struct BioGenerator {
    llm: Option<LlmClient>,
}

impl BioGenerator {
    /// `None` means every request gets the template bio.
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn generate(&self, keywords: &str) -> BioOutcome {
        let keywords = keywords.trim();

        let Some(llm) = &self.llm else {
            info!("No LLM credential configured; using template bio");
            return BioOutcome::NoCredential(fallback_bio(keywords));
        };

        match llm.complete(&build_bio_prompt(keywords), &bio_system()).await {
            Ok(text) => BioOutcome::Generated(text),
            Err(e) => {
                warn!("Bio generation failed, using template bio: {e}");
                BioOutcome::CallFailed {
                    text: fallback_bio(keywords),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Comma-separated keywords, trimmed, with empty entries dropped.
pub fn keyword_list(keywords: &str) -> Vec<&str> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Deterministic bio built from comma-separated keywords.
pub fn fallback_bio(keywords: &str) -> String {
    let joined = keyword_list(keywords).join(SEPARATOR);

    format!("Runner into {joined}. Always up for a shared run.")
}
