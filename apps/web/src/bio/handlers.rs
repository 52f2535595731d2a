use axum::{extract::State, Form};
use serde::Deserialize;
use tracing::info;

use crate::bio::generator::keyword_list;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateBioRequest {
    #[serde(default)]
    pub keywords: String,
}

/// POST /ai/generate_bio
///
/// Returns the bio as plain text. Remote failures fall back to the template,
/// so the only error response is a 400 when no keyword survives
/// splitting on commas.
pub async fn handle_generate_bio(
    State(state): State<AppState>,
    Form(request): Form<GenerateBioRequest>,
) -> Result<String, AppError> {
    if keyword_list(&request.keywords).is_empty() {
        return Err(AppError::Validation("keywords cannot be empty".to_string()));
    }

    let outcome = state.bio.generate(&request.keywords).await;
    info!(
        "Bio generated (source: {}, {} chars)",
        outcome.source(),
        outcome.text().chars().count()
    );

    Ok(outcome.into_text())
}
