use serde::{Deserialize, Serialize};

use crate::client::{ChatClient, ChatRequest};
use crate::response::{CompletionResponse, STATUS_BAD_REQUEST, STATUS_SERVER_ERROR};

pub const DEFAULT_WORD_COUNT: u32 = 100;

const NO_CONTENT: &str = "No content generated or content is empty.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub topic: String,
    /// Upper bound asked of the model; 0 falls back to [`DEFAULT_WORD_COUNT`].
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    /// Markdown instead of plain text.
    #[serde(default)]
    pub markdown: bool,
}

fn default_word_count() -> u32 {
    DEFAULT_WORD_COUNT
}

impl ArticleRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into(), word_count: DEFAULT_WORD_COUNT, markdown: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub topic: String,
    #[serde(flatten)]
    pub response: CompletionResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub fn article_prompt(topic: &str, word_count: u32, markdown: bool) -> String {
    let format = if markdown { "Use proper Markdown formatting." } else { "Use plain text formatting." };
    format!("Write a detailed article about {topic}, aiming for a maximum of {word_count} words. {format}")
}

#[tracing::instrument(skip(client, request), fields(topic = %request.topic))]
pub async fn generate_article(client: &ChatClient, request: &ArticleRequest) -> GeneratedArticle {
    let topic = request.topic.clone();
    if topic.trim().is_empty() {
        return GeneratedArticle {
            topic,
            response: CompletionResponse::failed("Topic must be a non-empty string.", STATUS_BAD_REQUEST),
            details: None,
        };
    }

    let word_count = if request.word_count == 0 {
        tracing::warn!("invalid word count, using {}", DEFAULT_WORD_COUNT);
        DEFAULT_WORD_COUNT
    } else {
        request.word_count
    };

    let prompt = article_prompt(&topic, word_count, request.markdown);
    match client.complete(&ChatRequest::prompt(prompt)).await {
        Ok(reply) => {
            let content = reply.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
            GeneratedArticle {
                topic,
                response: CompletionResponse::ok(content.unwrap_or_else(|| NO_CONTENT.to_string())),
                details: None,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "article generation failed");
            GeneratedArticle {
                topic,
                response: CompletionResponse::failed("Failed to generate content.", STATUS_SERVER_ERROR),
                details: Some(err.detail().map(str::to_string).unwrap_or_else(|| err.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_switches_format() {
        assert_eq!(
            article_prompt("Rust", 50, true),
            "Write a detailed article about Rust, aiming for a maximum of 50 words. Use proper Markdown formatting."
        );
        assert!(article_prompt("Rust", 50, false).ends_with("Use plain text formatting."));
    }

    #[test]
    fn request_defaults() {
        let r: ArticleRequest = serde_json::from_str(r#"{"topic":"Tea"}"#).unwrap();
        assert_eq!(r, ArticleRequest::new("Tea"));
    }

    #[test]
    fn article_flattens_record() {
        let a = GeneratedArticle { topic: "Tea".into(), response: CompletionResponse::ok("Tea is nice."), details: None };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v, serde_json::json!({ "topic": "Tea", "content": "Tea is nice.", "status_code": 200 }));
    }
}
