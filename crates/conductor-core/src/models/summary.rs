//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus, SubtaskStatus};

/// Summary information about a plan with subtask statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Description of the overall objective
    pub description: String,
    /// Aggregate plan status
    pub status: PlanStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of subtasks
    pub total_subtasks: u32,
    /// Number of completed subtasks
    pub completed_subtasks: u32,
    /// Number of dispatched subtasks
    pub dispatched_subtasks: u32,
    /// Number of failed subtasks
    pub failed_subtasks: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let count = |status: SubtaskStatus| {
            plan.subtasks.iter().filter(|s| s.status == status).count() as u32
        };

        Self {
            id: plan.id.clone(),
            description: plan.description.clone(),
            status: plan.status,
            created_at: plan.created_at,
            total_subtasks: plan.subtasks.len() as u32,
            completed_subtasks: count(SubtaskStatus::Completed),
            dispatched_subtasks: count(SubtaskStatus::Dispatched),
            failed_subtasks: count(SubtaskStatus::Failed),
        }
    }
}
