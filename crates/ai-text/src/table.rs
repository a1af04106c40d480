use crate::client::{ChatClient, ChatRequest};
use crate::response::{CompletionResponse, STATUS_BAD_REQUEST, STATUS_SERVER_ERROR};

const FALLBACK_ERROR: &str = "Failed to process request.";
const NO_CONTENT: &str = "No content generated.";
const TEMPERATURE: f32 = 0.4;
const MAX_TOKENS: u32 = 500;

pub fn table_prompt(data: &str) -> String {
    format!(
        "Convert the following data into a **clean, well-aligned Markdown table**.\n\
         - Ensure all columns have consistent widths.\n\
         - Do not wrap the output in markdown code blocks.\n\
         - Replace empty fields with \"N/A\".\n\
         - Do not escape \"|\" inside text.\n\n\
         Data:\n\n\"{data}\""
    )
}

/// Drop ```` ```markdown ```` / ```` ``` ```` fences the model adds despite being asked not to.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```markdown", "").replace("```", "").trim().to_string()
}

/// Re-pad a markdown table so every column is as wide as its widest cell.
///
/// Blank lines are dropped and cells are trimmed; widths are counted in chars.
/// Each rebuilt row is trimmed too, so `| a |` stays `| a |` rather than ` | a | `.
pub fn format_markdown_table(table: &str) -> String {
    let rows: Vec<Vec<&str>> = table
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split('|').map(str::trim).collect())
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            match widths.get_mut(i) {
                Some(max) => *max = (*max).max(w),
                None => widths.push(w),
            }
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tracing::instrument(skip(client, data), fields(text_len = data.len()))]
pub async fn make_table(client: &ChatClient, data: &str) -> CompletionResponse {
    if data.trim().is_empty() {
        return CompletionResponse::failed("Input data cannot be empty.", STATUS_BAD_REQUEST);
    }

    let request = ChatRequest::prompt(table_prompt(data))
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS);

    match client.complete(&request).await {
        Ok(reply) => {
            let table = format_markdown_table(&strip_code_fences(reply.as_deref().unwrap_or("")));
            if table.is_empty() {
                tracing::warn!("table request returned no content");
                return CompletionResponse::ok(NO_CONTENT);
            }
            CompletionResponse::ok(table)
        }
        Err(err) => {
            tracing::error!(error = %err, "table request failed");
            CompletionResponse::failed(
                err.detail().unwrap_or(FALLBACK_ERROR),
                err.status().unwrap_or(STATUS_SERVER_ERROR),
            )
        }
    }
}
