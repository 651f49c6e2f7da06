use serde::Serialize;

use crate::models::{ScanEvent, Student};
use crate::roster::{Roster, TransitionResult};

/// Classified outcome of one scan, rendered by the notifier layer.
///
/// All three variants are ordinary business outcomes; none of them is an
/// error and none rolls back roster state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScanOutcome {
    /// An absent student transitioned to present.
    Success { student: Student },
    /// The student was already present; informational only.
    Duplicate { student: Student },
    /// No roster entry matches the token (including blank tokens).
    NotFound { token: String },
}

impl ScanOutcome {
    /// Returns the outcome kind as a string for logging and API responses
    pub fn result_type(&self) -> &'static str {
        match self {
            ScanOutcome::Success { .. } => "success",
            ScanOutcome::Duplicate { .. } => "duplicate",
            ScanOutcome::NotFound { .. } => "not_found",
        }
    }

    pub fn student(&self) -> Option<&Student> {
        match self {
            ScanOutcome::Success { student } | ScanOutcome::Duplicate { student } => Some(student),
            ScanOutcome::NotFound { .. } => None,
        }
    }

    /// Human-readable notification text for the transient toast.
    pub fn message(&self) -> String {
        match self {
            ScanOutcome::Success { student } => {
                format!("{} marked as present!", student.name)
            }
            ScanOutcome::Duplicate { student } => {
                format!("{} is already marked as present.", student.name)
            }
            ScanOutcome::NotFound { token } => {
                format!("Student ID {} not found in the system.", token)
            }
        }
    }
}

/// Resolves one decoded scan event against the roster.
///
/// The token is trimmed before matching; a token that is empty after
/// trimming resolves to `NotFound`, the same as an unknown id. The caller
/// holds the roster write lock, so the transition is atomic per id.
pub fn resolve(roster: &mut Roster, event: &ScanEvent) -> ScanOutcome {
    let token = event.token.trim();

    if token.is_empty() {
        tracing::warn!("Rejecting blank scan token");
        return ScanOutcome::NotFound {
            token: token.to_string(),
        };
    }

    match roster.mark_present(token, event.occurred_at) {
        TransitionResult::MarkedPresent(student) => {
            tracing::info!(student_id = %student.id, scan_time = %event.occurred_at, "Student marked present");
            ScanOutcome::Success { student }
        }
        TransitionResult::AlreadyPresent(student) => {
            tracing::info!(student_id = %student.id, "Repeat scan ignored");
            ScanOutcome::Duplicate { student }
        }
        TransitionResult::UnknownId => {
            tracing::warn!(token = %token, "Scan token not in roster");
            ScanOutcome::NotFound {
                token: token.to_string(),
            }
        }
    }
}
