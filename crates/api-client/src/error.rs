use bitsa_http::StatusError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("BITSA API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("not found")]
    NotFound,
}

impl Error {
    /// Maps a transport failure. Non-2xx responses become [`Error::Api`] with
    /// whatever message the backend put in the body, except 404, which gets
    /// its own variant so a missing event can be handled as a state rather
    /// than a failure.
    pub(crate) fn from_transport(err: bitsa_http::Error) -> Self {
        match err.downcast::<StatusError>() {
            Ok(status) if status.status == 404 => Error::NotFound,
            Ok(status) => Error::Api {
                status: status.status,
                message: backend_message(&status.body),
            },
            Err(other) => Error::Http(other),
        }
    }
}

/// Best-effort extraction of the backend's error message. Error bodies are
/// usually `{ success: false, message }`, occasionally `{ error }`.
fn backend_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "request failed".to_string()
    } else {
        text.to_string()
    }
}
