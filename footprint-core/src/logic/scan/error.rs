//! Scan Errors & Input Validation

use thiserror::Error;

use crate::logic::service::ServiceError;

/// Channel failures. Both kinds end the operation and are shown as-is;
/// neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Bad local input - never reaches the network
    #[error("{0}")]
    Validation(String),

    /// Network / HTTP / body failure
    #[error("{0}")]
    Transport(String),
}

impl From<ServiceError> for ScanError {
    fn from(err: ServiceError) -> Self {
        ScanError::Transport(err.to_string())
    }
}

/// Trimmed email, or the message to show
pub fn validate_email(raw: &str) -> Result<String, ScanError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ScanError::Validation("Please enter an email address".to_string()));
    }
    if !email.contains('@') {
        return Err(ScanError::Validation("Please enter a valid email address".to_string()));
    }
    Ok(email.to_string())
}

/// "jane.doe@example.com" -> "j***@example.com" (for logs)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
