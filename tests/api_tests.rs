//! In-process API tests covering the submission scenarios

use std::sync::Arc;

use astroai::api::{self, AppState};
use astroai::config::AstroAiConfig;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(config: AstroAiConfig) -> Router {
    Router::new().nest(
        "/api",
        api::router(AppState {
            config: Arc::new(config),
        }),
    )
}

/// No credential configured: the AI feature is disabled for the session
fn offline_config() -> AstroAiConfig {
    AstroAiConfig::default()
}

async fn post_reading(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/reading")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app(offline_config())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_full_submission_without_credential_shows_offline_reading() {
    let (status, body) = post_reading(
        app(offline_config()),
        json!({
            "name": "Aanya Sharma",
            "date_of_birth": "2000-04-05",
            "birthplace": "Mumbai, India"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["sign"], json!("Aries"));

    let overview = data["overview"].as_str().unwrap();
    assert!(overview.contains("Aanya"));
    assert!(overview.contains("Bold, action-oriented"));

    // No credential means the offline tip for the computed sign, with
    // no outbound call attempted
    assert_eq!(data["source"], json!("offline"));
    assert!(
        data["detailed_reading"]
            .as_str()
            .unwrap()
            .contains("Take a bold first step")
    );
    assert!(
        data["advisory"]
            .as_str()
            .unwrap()
            .contains("offline guidance")
    );
}

#[tokio::test]
async fn test_missing_date_of_birth_blocks_submission() {
    let (status, body) = post_reading(
        app(offline_config()),
        json!({
            "name": "Aanya Sharma",
            "birthplace": "Mumbai, India"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("date of birth"));
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_invalid_time_of_birth_is_rejected() {
    let (status, body) = post_reading(
        app(offline_config()),
        json!({
            "date_of_birth": "2000-04-05",
            "time_of_birth": "not-a-time"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("time of birth"));
}

#[tokio::test]
async fn test_empty_name_and_place_use_placeholders() {
    let (status, body) = post_reading(
        app(offline_config()),
        json!({ "date_of_birth": "2000-04-05" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let overview = body["data"]["overview"].as_str().unwrap();
    assert!(overview.starts_with("**You, your Sun sign is"));
    assert!(overview.contains("*your roots*"));
}

#[tokio::test]
async fn test_remote_failure_degrades_to_offline_with_advisory() {
    // Credential present but the endpoint is unreachable: the single
    // remote attempt fails and the offline reading is served instead
    let mut config = AstroAiConfig::default();
    config.completion.api_key = Some("test_key_123".to_string());
    config.completion.base_url = "http://127.0.0.1:9".to_string();
    config.completion.timeout_seconds = 2;

    let (status, body) = post_reading(
        app(config),
        json!({
            "name": "Aanya Sharma",
            "date_of_birth": "1994-12-25",
            "time_of_birth": "23:15",
            "birthplace": "Mumbai, India"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["sign"], json!("Capricorn"));
    assert_eq!(data["source"], json!("offline"));
    assert!(
        data["detailed_reading"]
            .as_str()
            .unwrap()
            .contains("Build small rituals")
    );
    assert!(
        data["advisory"]
            .as_str()
            .unwrap()
            .contains("AI temporarily unavailable")
    );
}
