//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Entity not found in the store
    #[error("entity not found: {id}")]
    EntityNotFound { id: String },

    /// Group not part of the active grouping mode
    #[error("unknown group: {id}")]
    UnknownGroup { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Persistence transport failure (network error, timeout)
    #[error("failed to persist {id}: {message}")]
    Persist { id: String, message: String },

    /// Server answered with a non-success status
    #[error("server rejected update for {id}: HTTP {status}")]
    Rejected { id: String, status: u16 },
}

impl BoardError {
    /// Create a persistence transport error
    pub fn persist(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Persist {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a rejected-update error
    pub fn rejected(id: impl Into<String>, status: u16) -> Self {
        Self::Rejected {
            id: id.into(),
            status,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a retryable error. Transport failures are;
    /// explicit server rejections are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persist { .. })
    }
}
