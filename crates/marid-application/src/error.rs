//! Orchestrator boundary errors.

use crate::messages;
use marid_core::error::MaridError;
use marid_core::generation::GenerationOperation;
use thiserror::Error;

/// What a workflow action reports to its caller.
///
/// Generation failures never leave a workflow as raw [`MaridError`]s: they
/// are logged and turned into [`WorkflowError::Failed`] with the localized
/// message for the operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// The action was refused before reaching the AI layer
    #[error("{0}")]
    Rejected(MaridError),

    /// The AI call failed; `message` is ready for display
    #[error("{message}")]
    Failed {
        operation: GenerationOperation,
        message: String,
    },
}

impl WorkflowError {
    pub fn failed(operation: GenerationOperation, message: impl Into<String>) -> Self {
        Self::Failed {
            operation,
            message: message.into(),
        }
    }

    /// Text to show the user.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(err) => messages::rejected(err),
            Self::Failed { message, .. } => message,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<MaridError> for WorkflowError {
    fn from(err: MaridError) -> Self {
        match err {
            MaridError::Generation { operation, message } => {
                tracing::error!("[Workflow] {} failed: {}", operation, message);
                Self::failed(operation, messages::generation_failed(operation))
            }
            other => {
                tracing::warn!("[Workflow] Rejected: {}", other);
                Self::Rejected(other)
            }
        }
    }
}

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;
