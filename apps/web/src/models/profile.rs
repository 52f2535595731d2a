use serde::{Deserialize, Serialize};

/// A runner profile as persisted in the profile document.
///
/// Optional text fields default to an empty string when a stored record
/// omits them, so "absent" and "empty" are the same value everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub city: String,
    /// Minutes per distance unit; lower is faster.
    pub pace: f64,
    #[serde(default)]
    pub fav_distance: String,
    #[serde(default)]
    pub bio: String,
}

impl Profile {
    /// Formats the pace back into `M:SS` for display.
    pub fn pace_display(&self) -> String {
        let total_seconds = (self.pace * 60.0).round() as i64;
        format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_deserialize_as_empty() {
        let profile: Profile =
            serde_json::from_str(r#"{"id": 1, "name": "Ana", "pace": 5.5}"#).unwrap();
        assert_eq!(profile.fav_distance, "");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.age, "");
        assert_eq!(profile.city, "");
    }

    #[test]
    fn test_missing_pace_is_rejected() {
        let result = serde_json::from_str::<Profile>(r#"{"id": 1, "name": "Ana"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pace_display_rounds_to_seconds() {
        let profile = Profile {
            id: 1,
            name: "Ana".to_string(),
            age: String::new(),
            city: String::new(),
            pace: 5.5,
            fav_distance: String::new(),
            bio: String::new(),
        };
        assert_eq!(profile.pace_display(), "5:30");
    }
}
