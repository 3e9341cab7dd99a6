use thiserror::Error;

/// Errors raised while loading or checking [`crate::config::ApiConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}

/// Errors raised when user input or an outgoing request body is rejected locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(err: validator::ValidationErrors) -> Self {
        ValidationError::InvalidRequest(err.to_string())
    }
}
