//! Scan Service Errors

use thiserror::Error;

/// Failures talking to the scan service.
/// All of them are transport-level from the orchestrator's point of view.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server's error text when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Parse(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}
