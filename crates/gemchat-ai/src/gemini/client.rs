//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, ChatMessage, Role};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API. The whole transcript
    /// is sent each call; the pending user message must already be in it.
    pub(crate) fn build_request_body(&self, transcript: &[ChatMessage]) -> serde_json::Value {
        let contents: Vec<_> = transcript
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Model => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.text }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Extract the reply text from a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut reply = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                reply.push_str(text);
            }
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(temperature: f64) -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_temperature(temperature))
    }

    #[test]
    fn api_url_targets_generate_content() {
        let client = client(0.5);
        assert_eq!(
            client.api_url(),
            format!("{GEMINI_API_BASE}/gemini-1.5-flash:generateContent")
        );
    }

    #[test]
    fn request_body_maps_roles_and_temperature() {
        let client = client(0.3);
        let transcript = vec![
            ChatMessage::now(Role::User, "hello"),
            ChatMessage::now(Role::Model, "hi"),
            ChatMessage::now(Role::User, "how are you?"),
        ];

        let body = client.build_request_body(&transcript);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "hello");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "hi");
        assert_eq!(contents[2]["role"], "user");

        assert_eq!(body["generationConfig"]["temperature"], 0.3);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn parse_response_concatenates_parts() {
        let client = client(0.5);
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Hello, " }, { "text": "world!" }]
                }
            }]
        });

        assert_eq!(client.parse_response(json).unwrap(), "Hello, world!");
    }

    #[test]
    fn parse_response_rejects_missing_candidates() {
        let client = client(0.5);

        let err = client.parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));

        let err = client
            .parse_response(serde_json::json!({ "candidates": [] }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }
}
