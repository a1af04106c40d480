//! Thin helpers over a chat-completion endpoint: punctuation fixing,
//! translation, markdown tables and short articles.
//!
//! Each helper makes exactly one request and folds any failure into a
//! [`CompletionResponse`] instead of returning an error.

pub mod article;
pub mod client;
pub mod config;
pub mod punctuate;
pub mod response;
pub mod table;
pub mod translate;

pub use article::{generate_article, ArticleRequest, GeneratedArticle};
pub use client::{AiError, ChatClient, ChatMessage, ChatRequest};
pub use config::AiConfig;
pub use punctuate::punctuate;
pub use response::CompletionResponse;
pub use table::{format_markdown_table, make_table};
pub use translate::{translate, Language, UnknownLanguage};
