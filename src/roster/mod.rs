// Roster module - session-scoped attendance state

pub mod loader;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::Student;

/// Shared handle to the roster.
///
/// There is a single writer path (`mark_present`) and it runs under the
/// write lock, so the read-check-write transition is one critical section
/// even when several scan stations post concurrently.
pub type SharedRoster = Arc<RwLock<Roster>>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RosterError {
    #[error("student id must not be empty")]
    EmptyId,

    #[error("duplicate student id: {0}")]
    DuplicateId(String),
}

/// Outcome of the single mutation path.
///
/// `AlreadyPresent` is an idempotent no-op, not an error; `UnknownId`
/// leaves the roster untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionResult {
    MarkedPresent(Student),
    AlreadyPresent(Student),
    UnknownId,
}

/// Aggregate attendance figures derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present_count: usize,
    pub absent_count: usize,
    pub total_count: usize,
    /// Percentage to one decimal place; `"0"` for an empty roster.
    pub attendance_rate: String,
}

/// The authoritative list of known students and their presence state.
///
/// Insertion order is preserved for stable display; matching is by exact,
/// case-sensitive id. Constructed once at session start and discarded at
/// session end, with no persistence in between.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, enforcing unique non-empty ids.
    pub fn from_students(students: Vec<Student>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for student in students {
            roster.add(student)?;
        }
        Ok(roster)
    }

    fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if student.id.is_empty() {
            return Err(RosterError::EmptyId);
        }
        if self.index.contains_key(&student.id) {
            return Err(RosterError::DuplicateId(student.id));
        }
        self.index.insert(student.id.clone(), self.students.len());
        self.students.push(student);
        Ok(())
    }

    pub fn into_shared(self) -> SharedRoster {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Looks up a student by exact, case-sensitive id.
    ///
    /// An empty id never matches.
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        if id.is_empty() {
            return None;
        }
        self.index.get(id).map(|&i| &self.students[i])
    }

    /// Transitions a student to present, capturing the scan timestamp.
    ///
    /// Unknown ids and repeat scans leave the roster unchanged; `scan_time`
    /// keeps the timestamp of the first transition.
    pub fn mark_present(&mut self, id: &str, at: DateTime<Utc>) -> TransitionResult {
        if id.is_empty() {
            return TransitionResult::UnknownId;
        }
        let Some(&i) = self.index.get(id) else {
            return TransitionResult::UnknownId;
        };

        let student = &mut self.students[i];
        if student.present {
            return TransitionResult::AlreadyPresent(student.clone());
        }

        student.present = true;
        student.scan_time = Some(at);
        TransitionResult::MarkedPresent(student.clone())
    }

    /// Ordered, cloned view of the roster for display and aggregation.
    pub fn snapshot(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Ids of all known students, in insertion order.
    pub fn student_ids(&self) -> Vec<String> {
        self.students.iter().map(|s| s.id.clone()).collect()
    }

    pub fn summary(&self) -> AttendanceSummary {
        let total_count = self.students.len();
        let present_count = self.students.iter().filter(|s| s.present).count();

        let attendance_rate = if total_count == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", present_count as f64 / total_count as f64 * 100.0)
        };

        AttendanceSummary {
            present_count,
            absent_count: total_count - present_count,
            total_count,
            attendance_rate,
        }
    }
}
