//! Transport errors and the display strings derived from them.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the portal API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// A request URL could not be formed from the base URL and path
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (DNS, connect, reset...)
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Server answered {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    /// The response body did not have the expected shape
    #[error("Unexpected response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 or 403: the session is missing or expired.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// The `error` field of the response body, when the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message for the store: the server's own words, else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        ApiError::Status {
            status,
            message: extract_error_message(body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<Value>,
}

/// Pulls `error` out of `{"error": "..."}` or `{"error": {"message": "..."}}`.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.error? {
        Value::String(message) if !message.trim().is_empty() => Some(message),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
