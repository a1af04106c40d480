use crate::client::{ChatClient, ChatRequest};
use crate::response::{CompletionResponse, STATUS_BAD_REQUEST, STATUS_SERVER_ERROR};

const FALLBACK_ERROR: &str = "Failed to get response from the server.";
const NO_CONTENT: &str = "No content returned";

pub fn punctuation_prompt(text: &str) -> String {
    format!(
        "Fix the punctuation and capitalization of the following text. \
         Do not add, remove or reword anything else, and reply with the corrected text only.\n\n\"{text}\""
    )
}

#[tracing::instrument(skip(client, text), fields(text_len = text.len()))]
pub async fn punctuate(client: &ChatClient, text: &str) -> CompletionResponse {
    if text.trim().is_empty() {
        return CompletionResponse::failed("Input text cannot be empty.", STATUS_BAD_REQUEST);
    }

    match client.complete(&ChatRequest::prompt(punctuation_prompt(text))).await {
        Ok(Some(fixed)) if !fixed.trim().is_empty() => CompletionResponse::ok(fixed.trim()),
        Ok(_) => {
            tracing::warn!("punctuation request returned no content");
            CompletionResponse::ok(NO_CONTENT)
        }
        Err(err) => {
            tracing::error!(error = %err, "punctuation request failed");
            CompletionResponse::failed(err.detail().unwrap_or(FALLBACK_ERROR), STATUS_SERVER_ERROR)
        }
    }
}
