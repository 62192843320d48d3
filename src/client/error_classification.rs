//! HTTP error classification.
//!
//! 401, 403 and 404 get fixed messages because Portainer's bodies for those are
//! either empty or unhelpful. Everything else surfaces the server's own
//! `message` / `details` field when present.

use crate::{Error, ErrorContext};

/// Build the classified error for a non-success response.
pub(crate) fn classify_http_error(status: u16, path: &str, body: &str) -> Error {
    let message = match status {
        401 => "Authentication failed: invalid or expired API key".to_string(),
        403 => {
            "Permission denied: the API key does not have sufficient permissions for this operation"
                .to_string()
        }
        404 => format!("Resource not found: {}", path),
        _ => message_from_body(body)
            .unwrap_or_else(|| format!("Portainer API error (HTTP {})", status)),
    };

    let mut context = ErrorContext::new().with_source("request");
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        context = context.with_details(trimmed.to_string());
    }

    Error::Http {
        status,
        message,
        context,
    }
}

/// Extract `message` (preferred) or `details` from a JSON error body.
fn message_from_body(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "details"]
        .iter()
        .filter_map(|key| json.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}
