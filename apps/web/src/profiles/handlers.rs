//! Axum route handlers for the profile pages.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use tracing::debug;

use crate::errors::AppError;
use crate::flash::{notice_from, redirect_with, Notice, QueryPairs};
use crate::profiles::service::{create_profile, list_profiles, NewProfile, ProfileError};
use crate::state::AppState;
use crate::views::profiles::{new_profile_page, profile_list_page};

/// GET /profiles
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Html<String>, AppError> {
    let profiles = list_profiles(state.profiles.as_ref()).await?;
    Ok(profile_list_page(&profiles, notice_from(&query)))
}

/// GET /profiles/new
pub async fn handle_new_profile_form(Query(query): Query<QueryPairs>) -> Html<String> {
    new_profile_page(notice_from(&query))
}

/// POST /profiles/new
///
/// Validation failures go back to the form with a notice; success goes to the list.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Form(form): Form<NewProfile>,
) -> Result<Redirect, AppError> {
    match create_profile(state.profiles.as_ref(), form).await {
        Ok(_) => Ok(redirect_with("/profiles", Notice::ProfileCreated)),
        Err(ProfileError::MissingRequired) => {
            debug!("Rejected profile: missing name or pace");
            Ok(redirect_with("/profiles/new", Notice::MissingFields))
        }
        Err(ProfileError::InvalidPace) => {
            debug!("Rejected profile: unparseable pace");
            Ok(redirect_with("/profiles/new", Notice::InvalidPace))
        }
        Err(e) => Err(e.into()),
    }
}
