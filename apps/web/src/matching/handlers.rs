use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::flash::{first_param, redirect_with, Notice, QueryPairs};
use crate::matching::scoring::{find_top_matches, MATCH_LIMIT};
use crate::profiles::service::{get_profile, list_profiles, parse_profile_id};
use crate::state::AppState;
use crate::views::matches::matches_page;

/// GET /matches?for=<id>
///
/// Missing, malformed or unknown ids redirect to the list with a notice.
/// A repeated `for` key uses the first value.
pub async fn handle_matches(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, AppError> {
    let raw_id = first_param(&query, "for").map(str::trim).unwrap_or("");
    if raw_id.is_empty() {
        return Ok(redirect_with("/profiles", Notice::PickProfile).into_response());
    }

    let id = match parse_profile_id(raw_id) {
        Ok(id) => id,
        Err(e) => {
            debug!("Matches requested with bad id: {e}");
            return Ok(redirect_with("/profiles", Notice::ProfileNotFound).into_response());
        }
    };

    let all = list_profiles(state.profiles.as_ref()).await?;
    let Some(me) = get_profile(&all, id) else {
        return Ok(redirect_with("/profiles", Notice::ProfileNotFound).into_response());
    };

    let matches = find_top_matches(me, &all, MATCH_LIMIT);
    debug!("Found {} matches for profile {}", matches.len(), me.id);

    Ok(matches_page(me, &matches).into_response())
}
