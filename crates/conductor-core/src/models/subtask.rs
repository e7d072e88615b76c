//! Subtask model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::SubtaskStatus;

/// Represents an atomic unit of work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtask {
    /// Unique identifier within the plan ("subtask-{1-based index}")
    pub id: String,

    /// Brief description of the work
    pub description: String,

    /// Identifiers of subtasks in the same plan that must complete first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Current status of the subtask
    pub status: SubtaskStatus,

    /// Result text recorded when the subtask completes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Error text recorded when the subtask fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
