//! Client for the hosted chat-completion endpoint
//!
//! One request per submission: no retry, no backoff, no caching. The
//! caller decides whether a failure falls back to the offline reading.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::CompletionConfig;
use crate::error::AstroAiError;
use crate::models::ReadingPayload;

/// System framing for the completion conversation
const SYSTEM_PROMPT: &str = "You are a friendly, grounded AI astrologer. \
Use western sun-sign basics and gentle timing nuance. \
Be practical, supportive, and non-fatalistic. Offer 2–3 concise, actionable tips.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// One-shot client for the completion endpoint.
///
/// Carries no state beyond its configuration; a fresh client may be
/// constructed per submission.
pub struct RemoteReadingClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl RemoteReadingClient {
    /// Build a client from the completion configuration.
    ///
    /// Fails with a configuration error when no API key is set, before
    /// any request is attempted.
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AstroAiError::config("Completion API key is not set"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| AstroAiError::completion(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Request one generated reading for the payload.
    ///
    /// Returns the first completion choice trimmed of surrounding
    /// whitespace. Any failure (transport, status, malformed body) is
    /// returned as a completion error and is never retried here.
    pub async fn generate(&self, payload: &ReadingPayload) -> Result<String> {
        let user_prompt = build_user_prompt(payload);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, "Requesting reading from completion endpoint");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AstroAiError::completion(format!("Completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AstroAiError::completion(format!(
                "Completion endpoint returned {status}"
            )));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AstroAiError::completion(format!("Malformed completion response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| AstroAiError::completion("No choices in completion response"))
    }
}

/// Natural-language instruction embedding all payload fields
fn build_user_prompt(payload: &ReadingPayload) -> String {
    format!(
        "Birth details (no user question provided):\n\
         - Name: {name}\n\
         - DOB: {dob}\n\
         - Time: {tob}\n\
         - Place: {place}\n\
         - Sun sign: {sign}\n\
         \n\
         Create a short, well-structured reading with sections:\n\
         1) Personality snapshot\n\
         2) Career/Work\n\
         3) Relationships/Community\n\
         4) Wellbeing\n\
         End with a single empowering mantra line.",
        name = payload.name,
        dob = payload.dob,
        tob = payload.tob,
        place = payload.place,
        sign = payload.sign,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ZodiacSign;

    fn sample_payload() -> ReadingPayload {
        ReadingPayload {
            name: "Aanya Sharma".to_string(),
            dob: "2000-04-05".to_string(),
            tob: "N/A".to_string(),
            place: "Mumbai, India".to_string(),
            sign: ZodiacSign::Aries,
        }
    }

    #[test]
    fn test_user_prompt_embeds_all_fields() {
        let prompt = build_user_prompt(&sample_payload());
        assert!(prompt.contains("Name: Aanya Sharma"));
        assert!(prompt.contains("DOB: 2000-04-05"));
        assert!(prompt.contains("Time: N/A"));
        assert!(prompt.contains("Place: Mumbai, India"));
        assert!(prompt.contains("Sun sign: Aries"));
        assert!(prompt.contains("1) Personality snapshot"));
        assert!(prompt.contains("mantra"));
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = CompletionConfig {
            api_key: None,
            ..CompletionConfig::default()
        };
        let err = RemoteReadingClient::new(&config).unwrap_err();
        assert!(matches!(err, AstroAiError::Config { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = CompletionConfig {
            api_key: Some("test_key_123".to_string()),
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            ..CompletionConfig::default()
        };
        let client = RemoteReadingClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }
}
