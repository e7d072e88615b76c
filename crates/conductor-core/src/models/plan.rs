//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, Subtask};

/// Represents a decomposed objective with its ordered subtasks.
///
/// A plan is owned exclusively by the [`crate::store::PlanStore`]; callers
/// only ever see cloned snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan ("plan-{N}")
    pub id: String,

    /// Description of the overall objective
    pub description: String,

    /// Optional free-text context carried alongside the plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Subtasks in creation order
    pub subtasks: Vec<Subtask>,

    /// Aggregate status derived from the subtask statuses
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Next value of the per-plan subtask counter. Subtask identifiers come
    /// from this counter rather than from vector positions, so they stay
    /// stable if subtask removal is ever added.
    pub next_subtask: u64,
}

impl Plan {
    /// Look up a subtask by identifier.
    pub fn subtask(&self, id: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == id)
    }

    /// Look up a subtask by identifier, mutably.
    pub fn subtask_mut(&mut self, id: &str) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| s.id == id)
    }
}
