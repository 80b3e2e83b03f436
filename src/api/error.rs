//! Error types for the Products API.

use thiserror::Error;

/// Errors that can occur while talking to the Products API.
///
/// `Display` carries the technical detail for logs. Anything shown to a person goes
/// through [`ApiError::user_message`] instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No connection could be made to the service.
    #[error("Product service unreachable: {0}")]
    Unreachable(String),

    /// The request did not complete within the configured timeout.
    #[error("Product service timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("Product service rejected the request with {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The service answered with a success status that the operation does not accept.
    #[error("Product service returned unexpected status {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be decoded.
    #[error("Could not decode product service response: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("Product service request failed: {0}")]
    Transport(String),

    /// The configured base URL cannot address the Products endpoints.
    #[error("Invalid product service URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Short, human-readable explanation for notifications.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unreachable(_) => "the product service could not be reached".to_string(),
            ApiError::Timeout => "the product service did not respond in time".to_string(),
            ApiError::Rejected { status, .. } => {
                format!("the product service rejected the request (HTTP {status})")
            }
            ApiError::UnexpectedStatus(status) => {
                format!("the product service gave an unexpected answer (HTTP {status})")
            }
            ApiError::Decode(_) => "the product service sent a response that could not be read".to_string(),
            ApiError::Transport(_) => "the request to the product service failed".to_string(),
            ApiError::InvalidUrl(_) => "the product service address is misconfigured".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unreachable(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Rejected {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}
