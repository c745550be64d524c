//! Core Graph API utilities.
//!
//! This module contains the low-level helper that sends a prepared request to the
//! Graph API and turns transport failures, error statuses and unusable bodies into
//! [`InstagramError::UpstreamRequest`].

use log::{debug, error, info};
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::error::InstagramError;

use super::types::graph_id;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_chars`: Maximum number of characters kept before truncation
pub(crate) fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_chars {
        let head: String = sanitized.chars().take(max_chars).collect();
        format!("{}... [truncated, {} total bytes]", head, text.len())
    } else {
        sanitized
    }
}

/// Sends a Graph API request and returns the decoded JSON body.
///
/// # Parameters
///
/// - `request_builder`: A configured reqwest::RequestBuilder ready to send
/// - `operation`: Human-readable name for the operation, used in logs and errors
///
/// # Returns
///
/// - `Ok(Value)`: The JSON response body of a 2xx response
/// - `Err(InstagramError::UpstreamRequest)`: On transport error, non-2xx status or a non-JSON body
pub(crate) async fn send_graph_request(
    request_builder: RequestBuilder,
    operation: &'static str,
) -> Result<Value, InstagramError> {
    // Query strings carry the access token, keep URLs out of error messages
    let response = request_builder.send().await.map_err(|e| {
        let e = e.without_url();
        error!("Request for operation '{}' failed: {}", operation, e);
        InstagramError::upstream(operation, e.to_string())
    })?;

    let status = response.status();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation
    );

    let body = response.text().await.map_err(|e| {
        let e = e.without_url();
        error!(
            "Failed to read response body for operation '{}': {}",
            operation, e
        );
        InstagramError::upstream(operation, e.to_string())
    })?;

    if !status.is_success() {
        error!("Operation '{}' failed - Status: {}", operation, status);
        debug!(
            "Error response for '{}': {}",
            operation,
            sanitize_for_logging(&body, 200)
        );
        let message = match graph_error_message(&body) {
            Some(detail) => format!("Graph API returned {}: {}", status, detail),
            None => format!("Graph API returned {}", status),
        };
        return Err(InstagramError::upstream(operation, message));
    }

    debug!(
        "Response summary for '{}': {} bytes received",
        operation,
        body.len()
    );

    serde_json::from_str(&body).map_err(|e| {
        error!(
            "Operation '{}' returned a body that is not JSON: {}",
            operation, e
        );
        InstagramError::upstream(operation, format!("invalid JSON in response: {}", e))
    })
}

/// Reads the `id` field of a Graph API response, see [`graph_id`].
pub(crate) fn response_id(
    body: &Value,
    operation: &'static str,
    step: &str,
) -> Result<String, InstagramError> {
    body.get("id").and_then(graph_id).ok_or_else(|| {
        error!(
            "{} response for operation '{}' did not include an id",
            step, operation
        );
        InstagramError::upstream(operation, format!("{} response did not include an id", step))
    })
}

/// Extracts `error.message` from the Graph API error envelope.
fn graph_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
