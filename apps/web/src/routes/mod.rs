pub mod health;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::bio::handlers::handle_generate_bio;
use crate::matching::handlers::handle_matches;
use crate::profiles::handlers::{
    handle_create_profile, handle_list_profiles, handle_new_profile_form,
};
use crate::state::AppState;
use crate::views::pages::home_page;

/// GET /
async fn home_handler() -> Html<String> {
    home_page()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health::health_handler))
        .route("/profiles", get(handle_list_profiles))
        .route(
            "/profiles/new",
            get(handle_new_profile_form).post(handle_create_profile),
        )
        .route("/matches", get(handle_matches))
        .route("/ai/generate_bio", post(handle_generate_bio))
        .with_state(state)
}
