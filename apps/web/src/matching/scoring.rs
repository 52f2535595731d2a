//! Match scoring — pairs a runner with the profiles that run most like them.
//!
//! Score = |pace difference| + 0.5 if favorite distances differ.
//! Lower is more compatible.

use crate::models::profile::Profile;

/// How many matches the matches page shows.
pub const MATCH_LIMIT: usize = 5;

/// Added to the score when two runners prefer different distances.
pub const DISTANCE_MISMATCH_PENALTY: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Output model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Match {
    pub profile: Profile,
    pub score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single candidate against `me`.
pub fn score_pair(me: &Profile, candidate: &Profile) -> f64 {
    let pace_diff = (candidate.pace - me.pace).abs();
    let distance_penalty = if same_distance(me, candidate) {
        0.0
    } else {
        DISTANCE_MISMATCH_PENALTY
    };
    pace_diff + distance_penalty
}

/// Absent and empty favorite distances are the same value; otherwise exact.
fn same_distance(a: &Profile, b: &Profile) -> bool {
    a.fav_distance.trim() == b.fav_distance.trim()
}

/// Returns at most `limit` profiles from `all`, best score first.
///
/// The subject is excluded by id. Ties keep their order in `all`.
pub fn find_top_matches(me: &Profile, all: &[Profile], limit: usize) -> Vec<Match> {
    let mut candidates: Vec<Match> = all
        .iter()
        .filter(|p| p.id != me.id)
        .map(|p| Match {
            score: score_pair(me, p),
            profile: p.clone(),
        })
        .collect();

    // sort_by is stable, so equal scores stay in scan order.
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(limit);
    candidates
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
