//! Completion client trait and the OpenAI-compatible implementation.

use async_trait::async_trait;
use tracing::debug;

use deskmind_core::config::ProviderConfig;

use crate::error::ProviderError;
use crate::types::{ChatTurn, CompletionRequest, CompletionResponse};

/// Maximum characters of a provider error body carried into logs/errors.
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// A chat-completion backend.
///
/// The trait is the seam between the chat core and the network: production
/// uses [`OpenAiClient`], tests substitute deterministic doubles.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion over the ordered turn list and return the
    /// assistant's reply content.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError>;
}

/// Client for OpenAI-compatible chat-completion APIs.
///
/// One attempt per call. Transport failures, non-2xx statuses, unparseable
/// bodies, and empty completions are all reported as [`ProviderError`]s for
/// the caller to convert into a local fallback.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiClient {
    /// Build a client from provider settings and a resolved API key.
    pub fn new(config: &ProviderConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError> {
        let url = self.completions_url();
        let body = CompletionRequest {
            model: &self.model,
            messages: turns,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(url = %url, model = %self.model, turns = turns.len(), "Completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: truncate_chars(&body_text, ERROR_BODY_PREVIEW_CHARS),
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }

        Ok(content)
    }
}

/// Truncate a string to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(base_url: &str) -> OpenAiClient {
        let config = ProviderConfig {
            api_key: None,
            base_url: base_url.to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        };
        OpenAiClient::new(&config, "sk-test".to_string())
    }

    #[test]
    fn test_completions_url_joins_path() {
        let client = make_client("https://api.openai.com/v1");
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let client = make_client("http://localhost:11434/v1/");
        assert_eq!(
            client.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_truncate_chars_short_string() {
        assert_eq!(truncate_chars("hello", 200), "hello");
    }

    #[test]
    fn test_truncate_chars_long_string() {
        let long = "x".repeat(500);
        assert_eq!(truncate_chars(&long, 200).len(), 200);
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let s = "日本語テキスト";
        let truncated = truncate_chars(s, 3);
        assert_eq!(truncated, "日本語");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 1 on localhost is not listening; the request fails at the
        // transport layer without retries.
        let client = make_client("http://127.0.0.1:1/v1");
        let result = client.complete(&[ChatTurn::user("hello")]).await;
        assert!(matches!(result, Err(ProviderError::Transport(_))));
    }
}
