use serde_json::{json, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PxshotError>;

#[derive(Debug, Error)]
pub enum PxshotError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("API error ({status_code}): {message}")]
    Api {
        status_code: u16,
        message: String,
        raw_body: Value,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of a [`PxshotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was sent
    Validation,
    /// The service answered with a non-2xx status
    Api,
    Transport,
    Io,
    Serialization,
}

impl PxshotError {
    pub fn validation(message: impl Into<String>) -> Self {
        PxshotError::Validation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PxshotError::Validation { .. } => ErrorKind::Validation,
            PxshotError::Api { .. } => ErrorKind::Api,
            PxshotError::Transport(_) => ErrorKind::Transport,
            PxshotError::Io(_) => ErrorKind::Io,
            PxshotError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// HTTP status of an [`PxshotError::Api`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PxshotError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Parsed error body of an [`PxshotError::Api`] error, or the
    /// `{"message": <raw text>}` fallback when the body was not JSON.
    pub fn raw_body(&self) -> Option<&Value> {
        match self {
            PxshotError::Api { raw_body, .. } => Some(raw_body),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PxshotError::Validation { message } => message.clone(),
            PxshotError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for PxshotError {
    fn from(err: serde_json::Error) -> Self {
        PxshotError::Serialization(err.to_string())
    }
}

/// Build the error for a response whose status is outside `200..=299`.
///
/// Only `error.message` in the parsed body is consulted for the message;
/// anything else falls back to a generic text that names the status code.
pub fn map_error_response(status_code: u16, body: &[u8]) -> PxshotError {
    let raw_body = serde_json::from_slice::<Value>(body)
        .unwrap_or_else(|_| json!({ "message": String::from_utf8_lossy(body) }));

    let message = raw_body
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Request failed with status {status_code}"));

    PxshotError::Api {
        status_code,
        message,
        raw_body,
    }
}
