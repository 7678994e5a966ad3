//! Catalog fetch error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP Error: {0}")]
    Status(u16),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("No data received")]
    EmptyBody,
}

impl FetchError {
    /// Whether repeating the same request might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(_) | FetchError::EmptyBody => true,
            FetchError::Status(code) => *code >= 500 || *code == 429,
            FetchError::InvalidRequest(_) | FetchError::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidRequest(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}
