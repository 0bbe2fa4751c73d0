//! Error types for explain requests.

use thiserror::Error;

/// Errors that can occur while asking the service for an explanation.
///
/// All variants end up as the same user-facing error string; the split only
/// matters for logging.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("Request to explain service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-2xx status. Displays the body verbatim.
    #[error("{}", service_message(*status, body))]
    Service { status: u16, body: String },

    /// 2xx response whose body is not `{"explanation": ...}`.
    #[error("Invalid response from explain service: {0}")]
    Decode(String),
}

impl ExplainError {
    /// HTTP status, when the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ExplainError::Service { status, .. } => Some(*status),
            ExplainError::Transport(err) => err.status().map(|s| s.as_u16()),
            ExplainError::Decode(_) => None,
        }
    }
}

fn service_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}
