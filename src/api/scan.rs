use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{ScanEvent, Student};
use crate::services::scan_resolver::{self, ScanOutcome};
use crate::services::scanner::{SimulatedScanner, TokenSource};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub result: String, // "success", "duplicate", "not_found"
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ScanResponse {
    fn from_outcome(outcome: ScanOutcome) -> Self {
        let result = outcome.result_type().to_string();
        let message = outcome.message();

        match outcome {
            ScanOutcome::Success { student } | ScanOutcome::Duplicate { student } => Self {
                result,
                message,
                student: Some(student),
                token: None,
            },
            ScanOutcome::NotFound { token } => Self {
                result,
                message,
                student: None,
                token: Some(token),
            },
        }
    }
}

/// Accepts one decoded token from a scan station
///
/// All three outcomes are 200s; a miss is user feedback, not an HTTP error.
async fn submit_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Json<ScanResponse> {
    let event = ScanEvent::new(req.token);

    let outcome = {
        let mut roster = state.roster.write().await;
        scan_resolver::resolve(&mut roster, &event)
    };

    tracing::debug!(result = outcome.result_type(), "Scan handled");

    Json(ScanResponse::from_outcome(outcome))
}

/// Draws a random known id and resolves it, standing in for the camera pipeline
async fn simulate_scan(State(state): State<AppState>) -> Result<Json<ScanResponse>> {
    let candidates = state.roster.read().await.student_ids();

    let mut scanner = SimulatedScanner::new(candidates);
    let token = scanner
        .produce_token()
        .ok_or_else(|| AppError::Conflict("Roster is empty, nothing to scan".to_string()))?;

    let event = ScanEvent::new(token);
    let outcome = {
        let mut roster = state.roster.write().await;
        scan_resolver::resolve(&mut roster, &event)
    };

    Ok(Json(ScanResponse::from_outcome(outcome)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/scan", post(submit_scan))
        .route("/api/scan/simulate", post(simulate_scan))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::roster::Roster;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            session_name: "Test Session".to_string(),
            roster_path: "data/roster.json".to_string(),
        }
    }

    fn test_state() -> AppState {
        let students = [
            ("STU001", "Alice Johnson"),
            ("STU002", "Bob Smith"),
            ("STU003", "Carol Davis"),
        ]
        .into_iter()
        .map(|(id, name)| Student::new(id, name, "student@school.edu", "CS-3", None))
        .collect();

        AppState {
            roster: Roster::from_students(students).unwrap().into_shared(),
            config: test_config(),
        }
    }

    async fn post_scan(
        app: Router,
        token: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/scan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"token":"{}"}}"#, token)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_scan_endpoint_outcomes() {
        let app = router().with_state(test_state());

        let (status, body) = post_scan(app.clone(), "STU003").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "success");
        assert_eq!(body["student"]["name"], "Carol Davis");

        let (status, body) = post_scan(app.clone(), "STU003").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "duplicate");

        let (status, body) = post_scan(app, "STU999").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "not_found");
        assert_eq!(body["token"], "STU999");
        assert!(body.get("student").is_none());
    }

    #[tokio::test]
    async fn test_simulate_marks_a_known_student() {
        let state = test_state();
        let app = router().with_state(state.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/api/scan/simulate")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let summary = state.roster.read().await.summary();
        assert_eq!(summary.present_count, 1);
    }

    #[tokio::test]
    async fn test_simulate_with_empty_roster_conflicts() {
        let state = AppState {
            roster: Roster::new().into_shared(),
            config: test_config(),
        };
        let app = router().with_state(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/scan/simulate")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
