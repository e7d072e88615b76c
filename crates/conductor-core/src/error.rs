//! Error types for the orchestrator library.

use thiserror::Error;

use crate::models::PlanStatus;

/// Comprehensive error type for all orchestrator operations.
///
/// Every operation on the orchestrator either returns a success payload or
/// one of these variants; no failure path panics or takes down the hosting
/// process.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// A subtask declared a dependency that does not resolve to any subtask
    /// created in the same call. The whole creation is rejected and nothing
    /// is stored.
    #[error("Subtask '{subtask_id}' depends on unknown subtask '{dependency_id}'")]
    UnknownDependency {
        subtask_id: String,
        dependency_id: String,
    },
    /// Plan not found for the given identifier
    #[error("Plan with ID '{id}' not found")]
    PlanNotFound { id: String },
    /// The plan exists but the named subtask does not
    #[error("Subtask '{subtask_id}' not found in plan '{plan_id}'")]
    SubtaskNotFound {
        plan_id: String,
        subtask_id: String,
    },
    /// Merge was attempted before every subtask completed
    #[error("Plan '{id}' is not completed (current status: {status})")]
    PlanNotCompleted { id: String, status: PlanStatus },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OrchestratorError {
        OrchestratorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OrchestratorError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error denotes a missing plan or subtask.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrchestratorError::PlanNotFound { .. } | OrchestratorError::SubtaskNotFound { .. }
        )
    }
}

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, OrchestratorError>;
