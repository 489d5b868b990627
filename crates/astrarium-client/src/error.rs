//! Error types for the Astrarium API client

use thiserror::Error;

/// Client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached at all
    #[error("Cannot connect to Astrarium backend at {base_url}. Please ensure the backend server is running.")]
    Connect { base_url: String },

    /// The backend answered with a non-success status
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Any other HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token store could not be read or written
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Status code for API errors, `None` for transport or local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
