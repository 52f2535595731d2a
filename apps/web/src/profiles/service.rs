//! Profile lookup and creation over a `ProfileRepository`.

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::profile::Profile;
use crate::profiles::pace::parse_pace;
use crate::store::{ProfileRepository, StoreError};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Name and pace are required.")]
    MissingRequired,

    #[error("Pace must be a number (e.g., 5.30 or 5:30 for min/km).")]
    InvalidPace,

    #[error("Profile id must be numeric, got '{0}'")]
    InvalidId(String),

    #[error("No profile id left after {0}")]
    IdSpaceExhausted(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Raw form submission for a new profile. Every field is untrimmed text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pace: String,
    #[serde(default)]
    pub fav_distance: String,
    #[serde(default)]
    pub bio: String,
}

/// Validates `input`, assigns a timestamp id, appends and persists.
///
/// Validation happens before the store is read, so a rejected submission
/// never touches persistence.
pub async fn create_profile(
    repo: &dyn ProfileRepository,
    input: NewProfile,
) -> Result<Profile, ProfileError> {
    create_profile_at(repo, input, Utc::now().timestamp_millis()).await
}

async fn create_profile_at(
    repo: &dyn ProfileRepository,
    input: NewProfile,
    now_ms: i64,
) -> Result<Profile, ProfileError> {
    let name = input.name.trim();
    let pace = input.pace.trim();

    if name.is_empty() || pace.is_empty() {
        return Err(ProfileError::MissingRequired);
    }

    let pace = parse_pace(pace).ok_or(ProfileError::InvalidPace)?;

    let mut profiles = repo.load().await?;

    // Two creates inside the same millisecond would otherwise share an id.
    let id = match profiles.last() {
        Some(last) if last.id >= now_ms => last
            .id
            .checked_add(1)
            .ok_or(ProfileError::IdSpaceExhausted(last.id))?,
        _ => now_ms,
    };

    let profile = Profile {
        id,
        name: name.to_string(),
        age: input.age.trim().to_string(),
        city: input.city.trim().to_string(),
        pace,
        fav_distance: input.fav_distance.trim().to_string(),
        bio: input.bio.trim().to_string(),
    };

    profiles.push(profile.clone());
    repo.save(&profiles).await?;

    info!(
        "Created profile {} ({}), store now holds {}",
        profile.id,
        profile.name,
        profiles.len()
    );
    Ok(profile)
}

/// Linear scan of an already loaded list for the profile with `id`.
pub fn get_profile(profiles: &[Profile], id: i64) -> Option<&Profile> {
    profiles.iter().find(|p| p.id == id)
}

pub async fn list_profiles(repo: &dyn ProfileRepository) -> Result<Vec<Profile>, ProfileError> {
    Ok(repo.load().await?)
}

/// Ids are integers at every boundary; anything else is rejected here.
pub fn parse_profile_id(raw: &str) -> Result<i64, ProfileError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ProfileError::InvalidId(trimmed.to_string()))
}
