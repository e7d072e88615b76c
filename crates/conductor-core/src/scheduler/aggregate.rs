//! Derivation of the overall plan status from subtask statuses.

use crate::models::{PlanStatus, Subtask, SubtaskStatus};

/// Computes the aggregate plan status for a set of subtasks.
///
/// The rules, in precedence order:
///
/// 1. failed iff at least one subtask is failed
/// 2. completed iff every subtask is completed
/// 3. in_progress iff at least one subtask has left pending
/// 4. pending otherwise
///
/// The status is derived purely from the current subtask statuses on every
/// call. Failure is sticky in practice: completing other subtasks can never
/// clear rule 1 while the failed subtask itself remains failed.
pub fn aggregate_status(subtasks: &[Subtask]) -> PlanStatus {
    if subtasks
        .iter()
        .any(|s| s.status == SubtaskStatus::Failed)
    {
        PlanStatus::Failed
    } else if subtasks
        .iter()
        .all(|s| s.status == SubtaskStatus::Completed)
    {
        PlanStatus::Completed
    } else if subtasks
        .iter()
        .any(|s| s.status != SubtaskStatus::Pending)
    {
        PlanStatus::InProgress
    } else {
        PlanStatus::Pending
    }
}
