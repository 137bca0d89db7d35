//! JSON API for the reading form
//!
//! One submission flows validation -> classification -> composition ->
//! AI-or-offline detailed reading. Remote failures degrade the content,
//! never the request.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::config::AstroAiConfig;
use crate::models::{BirthInput, ReadingPayload, ReadingRequest};
use crate::reading::{compose_overview, offline_reading, remote::RemoteReadingClient};
use crate::zodiac::ZodiacSign;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AstroAiConfig>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Where the detailed reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSource {
    Ai,
    Offline,
}

/// Full response for one submission
#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    /// Derived sun sign
    pub sign: ZodiacSign,
    /// Templated overview reading
    pub overview: String,
    /// AI-generated or offline detailed reading
    pub detailed_reading: String,
    /// Origin of the detailed reading
    pub source: ReadingSource,
    /// Non-fatal notice shown above the detailed reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/reading", post(create_reading))
        .with_state(state)
}

/// GET /api/health - Health check
async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/reading - Process one form submission
async fn create_reading(
    State(state): State<AppState>,
    Json(request): Json<ReadingRequest>,
) -> Result<Json<ApiResponse<ReadingResponse>>, (StatusCode, Json<ApiResponse<ReadingResponse>>)> {
    let input = BirthInput::from_request(request).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(e.user_message())),
        )
    })?;

    let sign = input.sign();
    let overview = compose_overview(&input, sign);
    let payload = ReadingPayload::from_input(&input);

    let (detailed_reading, source, advisory) =
        detailed_reading(&state.config, &payload, sign).await;

    Ok(Json(ApiResponse::ok(ReadingResponse {
        sign,
        overview,
        detailed_reading,
        source,
        advisory,
    })))
}

/// AI-backed reading when a credential is configured, offline guidance
/// otherwise.
///
/// Without a credential no request is attempted. A remote failure falls
/// back to the offline reading with the failure detail surfaced as an
/// advisory.
async fn detailed_reading(
    config: &AstroAiConfig,
    payload: &ReadingPayload,
    sign: ZodiacSign,
) -> (String, ReadingSource, Option<String>) {
    if config.completion.api_key.is_none() {
        return (
            offline_reading(sign),
            ReadingSource::Offline,
            Some("No completion API key configured, showing offline guidance.".to_string()),
        );
    }

    let result = match RemoteReadingClient::new(&config.completion) {
        Ok(client) => client.generate(payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(text) => (text, ReadingSource::Ai, None),
        Err(e) => {
            tracing::warn!("Falling back to offline reading: {e}");
            (
                offline_reading(sign),
                ReadingSource::Offline,
                Some(format!(
                    "AI temporarily unavailable. Showing offline guidance. ({e})"
                )),
            )
        }
    }
}
