use chrono::{DateTime, Utc};

/// A single decoded identifier scan.
///
/// Ephemeral: produced by a token source (camera pipeline, simulator, or the
/// scan API) and consumed immediately by the resolver. Never stored.
#[derive(Debug, Clone)]
pub struct ScanEvent {
    /// Raw decoded token, expected to match a student id.
    pub token: String,
    /// Captured when the event entered the engine.
    pub occurred_at: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Builds an event with an explicit occurrence timestamp.
    pub fn at(token: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            occurred_at,
        }
    }
}
