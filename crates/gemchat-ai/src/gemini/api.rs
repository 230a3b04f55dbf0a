//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, ChatMessage, ModelClient};

use super::client::GeminiClient;

#[async_trait]
impl ModelClient for GeminiClient {
    async fn send_message(&self, transcript: &[ChatMessage]) -> Result<String, AiError> {
        let body = self.build_request_body(transcript);
        let url = self.api_url();

        debug!(model = %self.config.model, messages = transcript.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }

    fn temperature(&self) -> f64 {
        self.config.temperature
    }
}
