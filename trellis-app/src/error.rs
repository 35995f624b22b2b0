//! Error types for the host layer

use thiserror::Error;
use trellis_board::BoardError;

/// Result type for host operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can occur in the host layer
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP transport failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered outside the 2xx range
    #[error("unexpected response from {url}: HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Board engine error
    #[error(transparent)]
    Board(#[from] BoardError),

    /// IO error (config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create an unexpected-status error
    pub fn unexpected_status(url: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = AppError::unexpected_status("http://localhost/api/projects", 503);
        assert_eq!(
            err.to_string(),
            "unexpected response from http://localhost/api/projects: HTTP 503"
        );
    }

    #[test]
    fn test_board_error_passes_through() {
        let err = AppError::from(BoardError::rejected("p1", 500));
        assert_eq!(err.to_string(), "server rejected update for p1: HTTP 500");
    }
}
