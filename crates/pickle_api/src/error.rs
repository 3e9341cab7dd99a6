use pickle_core::{ConfigError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Not logged in")]
    NotAuthenticated,
}

impl ApiError {
    /// HTTP status of a rejected response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server refused the token (expired or revoked)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Failed before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(self, ApiError::Validation(_) | ApiError::Config(_) | ApiError::NotAuthenticated)
    }
}
