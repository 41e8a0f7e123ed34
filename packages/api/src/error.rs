//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network failure,
    /// undecodable JSON body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// Human-readable message taken from the response body, if any.
        message: Option<String>,
    },

    /// A paginated response carried a missing or non-numeric header.
    #[error("invalid pagination header {header}: {value:?}")]
    Pagination {
        header: &'static str,
        value: Option<String>,
    },
}

impl ApiError {
    /// Generic text shown when the server gave no usable message.
    pub const DEFAULT_MESSAGE: &'static str = "Erro inesperado ao comunicar com o servidor.";

    /// Message to show the user: the server-supplied text when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Pagination { .. } => None,
        }
    }
}

/// Pull a message out of an error response body.
///
/// Accepts a JSON object with a string `message` field, a bare JSON string,
/// or any non-empty plain text. Other JSON documents yield `None`.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(message)) if !message.trim().is_empty() => {
                Some(message.clone())
            }
            _ => None,
        },
        Ok(serde_json::Value::String(message)) if !message.trim().is_empty() => Some(message),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}
