use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::Student;
use crate::roster::AttendanceSummary;

/// Ordered roster snapshot for the display layer
async fn roster_snapshot(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.roster.read().await.snapshot())
}

/// Present/absent counts and the attendance rate
async fn roster_summary(State(state): State<AppState>) -> Json<AttendanceSummary> {
    Json(state.roster.read().await.summary())
}

/// Single student lookup by credential id
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>> {
    let roster = state.roster.read().await;

    roster
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No student with id {}", id)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/roster", get(roster_snapshot))
        .route("/api/roster/summary", get(roster_summary))
        .route("/api/roster/:id", get(get_student))
}
