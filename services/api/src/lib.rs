use std::net::SocketAddr;
use std::sync::Arc;

use ai_text::{ArticleRequest, CompletionResponse, GeneratedArticle, Language};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use converters::{handle_request, Services, TextRequest, TextResponse};
use serde::Deserialize;
use text_features::{AnalysisError, AnalysisInput, AnalysisResult};

pub const ADDR_ENV: &str = "TEXTLENS_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// `TEXTLENS_ADDR`, falling back to 127.0.0.1:8080.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {ADDR_ENV} {raw:?}: {e}"))?;
        Ok(Self { addr })
    }
}

/// JSON `{"error": "..."}` with a status picked from the failure.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<AnalysisError>() {
            Some(invalid) => Self::bad_request(invalid.to_string()),
            None => {
                tracing::error!(error = %err, "request failed");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{err:#}") }
            }
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub text: String,
    pub language: Language,
}

type AppState = Arc<Services>;

pub fn router(services: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/punctuate", post(punctuate))
        .route("/translate", post(translate))
        .route("/table", post(table))
        .route("/article", post(article))
        .route("/convert", post(convert))
        .with_state(services)
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn completion(resp: CompletionResponse) -> (StatusCode, Json<CompletionResponse>) {
    (status_of(resp.status_code), Json(resp))
}

async fn analyze(
    State(services): State<AppState>,
    body: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(input) = body?;
    Ok(Json(services.analyzer.analyze_input(&input)?))
}

async fn punctuate(
    State(services): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CompletionResponse>), ApiError> {
    let Json(body) = body?;
    Ok(completion(ai_text::punctuate(&services.chat, &body.text).await))
}

async fn translate(
    State(services): State<AppState>,
    body: Result<Json<TranslateBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CompletionResponse>), ApiError> {
    let Json(body) = body?;
    Ok(completion(ai_text::translate(&services.chat, &body.text, body.language).await))
}

async fn table(
    State(services): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CompletionResponse>), ApiError> {
    let Json(body) = body?;
    Ok(completion(ai_text::make_table(&services.chat, &body.text).await))
}

async fn article(
    State(services): State<AppState>,
    body: Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GeneratedArticle>), ApiError> {
    let Json(request) = body?;
    let generated = ai_text::generate_article(&services.chat, &request).await;
    Ok((status_of(generated.response.status_code), Json(generated)))
}

async fn convert(
    State(services): State<AppState>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TextResponse>), ApiError> {
    let Json(req) = body?;
    let resp = handle_request(&services, req).await?;
    Ok((status_of(resp.status_code()), Json(resp)))
}
