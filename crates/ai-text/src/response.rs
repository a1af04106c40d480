use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Uniform outcome of every AI helper. Failures are data, not `Err`:
/// check `error` before reading `content`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status_code: u16,
}

impl CompletionResponse {
    pub fn ok(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), error: None, status_code: STATUS_OK }
    }

    pub fn failed(error: impl Into<String>, status_code: u16) -> Self {
        Self { content: None, error: Some(error.into()), status_code }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_serialised() {
        let v = serde_json::to_value(CompletionResponse::failed("boom", 500)).unwrap();
        assert_eq!(v, serde_json::json!({ "error": "boom", "status_code": 500 }));
    }
}
