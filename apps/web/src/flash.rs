//! One-shot notices carried on redirects as `?notice=<code>`.

use axum::response::Redirect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingFields,
    InvalidPace,
    ProfileCreated,
    PickProfile,
    ProfileNotFound,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::MissingFields => "missing_fields",
            Notice::InvalidPace => "invalid_pace",
            Notice::ProfileCreated => "profile_created",
            Notice::PickProfile => "pick_profile",
            Notice::ProfileNotFound => "profile_not_found",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "missing_fields" => Some(Notice::MissingFields),
            "invalid_pace" => Some(Notice::InvalidPace),
            "profile_created" => Some(Notice::ProfileCreated),
            "pick_profile" => Some(Notice::PickProfile),
            "profile_not_found" => Some(Notice::ProfileNotFound),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::MissingFields => "Name and pace are required.",
            Notice::InvalidPace => "Pace must be a number (e.g., 5.30 or 5:30 for min/km).",
            Notice::ProfileCreated => "Profile created! Find matches 🙂",
            Notice::PickProfile => "Pick a profile to find matches.",
            Notice::ProfileNotFound => "Profile not found.",
        }
    }
}

/// Query string pairs in request order. Repeated keys are kept, so a
/// duplicated parameter never rejects the request.
pub type QueryPairs = Vec<(String, String)>;

/// First value for `key`, like a form's `args.get`.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// The notice to show, if the first `notice` code is a known one.
pub fn notice_from(pairs: &[(String, String)]) -> Option<Notice> {
    first_param(pairs, "notice").and_then(Notice::from_code)
}

/// 303 redirect to `path` carrying `notice`.
pub fn redirect_with(path: &str, notice: Notice) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", notice.code()))
}
