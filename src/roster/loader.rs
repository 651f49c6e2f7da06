use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::Student;
use crate::roster::{Roster, RosterError};

#[derive(thiserror::Error, Debug)]
pub enum RosterLoadError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid roster: {0}")]
    Invalid(#[from] RosterError),
}

/// One record in the roster file. Students always start a session absent,
/// so the file carries identity fields only.
#[derive(Debug, Deserialize)]
struct RosterEntry {
    id: String,
    name: String,
    email: String,
    class: String,
    #[serde(default)]
    photo_url: Option<String>,
}

/// Parses a JSON array of roster entries into a roster.
pub fn parse_roster(data: &str) -> Result<Roster, RosterLoadError> {
    let entries: Vec<RosterEntry> = serde_json::from_str(data)?;

    let students = entries
        .into_iter()
        .map(|e| Student::new(e.id, e.name, e.email, e.class, e.photo_url))
        .collect();

    Ok(Roster::from_students(students)?)
}

/// Loads the session roster from a JSON file.
///
/// Called once at startup; any failure here aborts the session.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, RosterLoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let roster = parse_roster(&data)?;

    tracing::info!(path = %path.display(), students = roster.len(), "Roster loaded");

    Ok(roster)
}
