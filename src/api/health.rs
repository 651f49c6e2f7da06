use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub roster_size: usize,
}

/// Health check endpoint
///
/// The engine holds no external dependencies, so a live process with a
/// loaded roster is healthy by definition.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let roster_size = state.roster.read().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        roster_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Student;
    use crate::roster::Roster;

    #[tokio::test]
    async fn test_health_reports_roster_size() {
        let state = AppState {
            roster: Roster::from_students(vec![Student::new(
                "STU001",
                "Alice Johnson",
                "alice@school.edu",
                "CS-3",
                None,
            )])
            .unwrap()
            .into_shared(),
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                session_name: "Test Session".to_string(),
                roster_path: "data/roster.json".to_string(),
            },
        };

        let Json(health) = health_check(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.roster_size, 1);
    }
}
