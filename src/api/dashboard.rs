use askama::Template;
use axum::{extract::State, routing::get, Router};

use crate::api::AppState;
use crate::models::Student;
use crate::roster::AttendanceSummary;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    session_name: String,
    current_date: String,
    students: Vec<Student>,
    summary: AttendanceSummary,
}

/// Attendance dashboard - summary tiles, scan controls, and the student list
async fn dashboard(State(state): State<AppState>) -> DashboardTemplate {
    let roster = state.roster.read().await;

    DashboardTemplate {
        session_name: state.config.session_name.clone(),
        current_date: chrono::Utc::now().format("%A, %B %-d, %Y").to_string(),
        students: roster.snapshot(),
        summary: roster.summary(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
