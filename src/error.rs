//! Error handling for the HomeBox client

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Message substituted when the backend reports a duplicate-email
/// constraint violation on registration.
pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email is already registered. Please login instead.";

/// Unified error type for the HomeBox client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport level failures, before an HTTP response exists
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Token store I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx HTTP response, normalized into status + message + raw payload
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    /// Session-level errors (e.g. an operation that requires a token)
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// The error body contract the backend speaks: either `{"error": ...}`,
/// `{"message": ...}`, or a bare JSON string.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: std::fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// True if this is an API error with HTTP status 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an `Error::Api` from a response status and raw body text.
    ///
    /// The body is matched against the fixed error-envelope contract; when
    /// it does not conform, the message falls back to the HTTP status
    /// reason rather than guessing at ad hoc shapes.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let payload: Option<Value> = serde_json::from_str(body).ok();

        let mut message = payload
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        // The SQLite constraint phrasing leaks through the register
        // endpoint; rewrite it to something a user can act on.
        if message.contains("UNIQUE constraint failed") && message.contains("email") {
            message = DUPLICATE_EMAIL_MESSAGE.to_string();
        }

        Error::Api {
            status: status.as_u16(),
            message,
            payload,
        }
    }
}

fn extract_message(payload: &Value) -> Option<String> {
    match payload {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => {
            let envelope: ErrorEnvelope =
                serde_json::from_value(payload.clone()).unwrap_or_default();
            envelope.error.or(envelope.message)
        }
        _ => None,
    }
}
