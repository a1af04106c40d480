use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AiConfig;

#[derive(Error, Debug)]
pub enum AiError {
    /// Connection, timeout, or a body that is not a completion.
    #[error("chat completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat completion service returned status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl AiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AiError::Status { status, .. } => Some(*status),
            AiError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Error text reported by the service itself, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AiError::Status { detail, .. } => detail.as_deref(),
            AiError::Http(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Single user message, service defaults for everything else.
    pub fn prompt(content: impl Into<String>) -> Self {
        Self { messages: vec![ChatMessage::user(content)], temperature: None, max_tokens: None }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// One-shot client for an OpenAI-style `/chat/completions` endpoint. No retries.
#[derive(Clone, Debug)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request; `Ok(None)` when the reply carries no `choices[0].message.content`.
    #[tracing::instrument(level = "debug", skip(self, request), fields(endpoint = %self.endpoint))]
    pub async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, AiError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status { status: status.as_u16(), detail: error_detail(&body) });
        }

        let completion = response.json::<ChatCompletion>().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content))
    }
}

/// `{"error": "..."}` or `{"error": {"message": "..."}}`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .as_str()
        .or_else(|| error.get("message").and_then(|m| m.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted() {
        let body = serde_json::to_value(ChatRequest::prompt("hi")).unwrap();
        assert_eq!(body, serde_json::json!({ "messages": [{ "role": "user", "content": "hi" }] }));

        let body = serde_json::to_value(ChatRequest::prompt("hi").temperature(0.5).max_tokens(10)).unwrap();
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 10);
    }

    #[test]
    fn error_detail_shapes() {
        assert_eq!(error_detail(r#"{"error":"nope"}"#).as_deref(), Some("nope"));
        assert_eq!(error_detail(r#"{"error":{"message":"slow down"}}"#).as_deref(), Some("slow down"));
        assert_eq!(error_detail(r#"{"detail":"x"}"#), None);
        assert_eq!(error_detail("<html>bad gateway</html>"), None);
    }

    #[test]
    fn status_error_exposes_code() {
        let e = AiError::Status { status: 429, detail: Some("later".into()) };
        assert_eq!(e.status(), Some(429));
        assert_eq!(e.detail(), Some("later"));
    }
}
