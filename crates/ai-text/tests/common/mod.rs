//! Local stand-in for the chat-completion service.

use std::net::SocketAddr;

use ai_text::{AiConfig, ChatClient};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

fn reply(content: impl Into<Value>) -> Json<Value> {
    Json(json!({ "choices": [{ "message": { "role": "assistant", "content": content.into() } }] }))
}

/// Replies with the prompt it was sent, padded with whitespace.
async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default().to_string();
    reply(format!("  {prompt}\n"))
}

/// Replies with the sampling parameters it received.
async fn params(Json(body): Json<Value>) -> Json<Value> {
    reply(format!("temperature={} max_tokens={}", body["temperature"], body["max_tokens"]))
}

async fn fenced_table() -> Json<Value> {
    reply("```markdown\n| Name | Age | City |\n|---|---|---|\n| Alice | 30 | New York |\n| Bob | 25 | Los Angeles |\n```")
}

async fn empty() -> Json<Value> {
    Json(json!({ "choices": [] }))
}

async fn blank() -> Json<Value> {
    reply("   ")
}

async fn overloaded() -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "model overloaded" })))
}

async fn limited() -> (StatusCode, Json<Value>) {
    (StatusCode::TOO_MANY_REQUESTS, Json(json!({ "error": { "message": "slow down" } })))
}

async fn gateway() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
}

async fn garbage() -> &'static str {
    "definitely not json"
}

pub async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/echo", post(echo))
        .route("/params", post(params))
        .route("/table", post(fenced_table))
        .route("/empty", post(empty))
        .route("/blank", post(blank))
        .route("/overloaded", post(overloaded))
        .route("/limited", post(limited))
        .route("/gateway", post(gateway))
        .route("/garbage", post(garbage));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn client(addr: SocketAddr, route: &str) -> ChatClient {
    ChatClient::new(&AiConfig::with_endpoint(format!("http://{addr}/{route}"))).unwrap()
}
