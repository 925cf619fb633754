//! Error types for the Marid application.

use crate::generation::GenerationOperation;
use thiserror::Error;

/// A shared error type for the entire Marid application.
///
/// Variants follow the failure taxonomy of the workflows: validation failures
/// are raised before any external call, generation failures are tagged with
/// the operation that produced them, and storage failures are reported by the
/// persisted store (which logs and swallows them for its callers).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaridError {
    /// A required input field was missing or blank
    #[error("Validation error: '{field}' is required")]
    Validation { field: &'static str },

    /// The requested action is not allowed in the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The AI service failed or returned non-conforming data
    #[error("Generation failed in {operation}: {message}")]
    Generation {
        operation: GenerationOperation,
        message: String,
    },

    /// Reading a persisted key failed
    #[error("Storage read failed for '{key}': {message}")]
    StorageRead { key: String, message: String },

    /// Writing a persisted key failed
    #[error("Storage write failed for '{key}': {message}")]
    StorageWrite { key: String, message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MaridError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error for the given field
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates a Generation error tagged with the failing operation
    pub fn generation(operation: GenerationOperation, message: impl Into<String>) -> Self {
        Self::Generation {
            operation,
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Generation error
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }

    /// Check if this is a storage read or write error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead { .. } | Self::StorageWrite { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the operation tag if this is a Generation error.
    pub fn operation(&self) -> Option<GenerationOperation> {
        match self {
            Self::Generation { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MaridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MaridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MaridError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MaridError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Transport-level failure reported by an [`AiBackend`](crate::generation::AiBackend).
///
/// The generation client converts every `BackendError` into
/// [`MaridError::Generation`] tagged with the operation that issued the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The service answered with a non-success status or the request did not complete
    #[error("Process error (status: {status_code:?}): {message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// The request could not be built or the reply carried no usable payload
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Anything else (e.g. an undecodable response body)
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// Whether a later, user-triggered retry has a chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProcessError {
                is_retryable: true,
                ..
            }
        )
    }
}

/// A type alias for `Result<T, MaridError>`.
pub type Result<T> = std::result::Result<T, MaridError>;
