use chrono::{DateTime, Utc};
use serde::Serialize;

/// A student enrolled in the session roster.
///
/// Identity fields are immutable for the lifetime of a session; only
/// `present` and `scan_time` change, and only through the roster's
/// transition operation. Invariant: `scan_time` is set iff `present`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Credential token printed on the student's ID card.
    pub id: String,
    pub name: String,
    pub email: String,
    pub class: String,
    /// Opaque display-image reference, never interpreted by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_time: Option<DateTime<Utc>>,
}

impl Student {
    /// Creates a student in the initial (absent) state.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        class: impl Into<String>,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            class: class.into(),
            photo_url,
            present: false,
            scan_time: None,
        }
    }

    /// Uppercase initials for the avatar fallback, e.g. "Alice Johnson" -> "AJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
