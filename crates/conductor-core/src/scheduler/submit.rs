//! Subtask outcome recording.

use super::{aggregate::aggregate_status, Orchestrator};
use crate::{
    error::{OrchestratorError, Result},
    models::{PlanStatus, SubtaskStatus},
    params::SubmitResult,
};

/// Outcome of one submit_result call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Identifier of the plan containing the subtask
    pub plan_id: String,
    /// Identifier of the resolved subtask
    pub subtask_id: String,
    /// Status the subtask was moved to
    pub new_status: SubtaskStatus,
    /// Re-derived overall plan status
    pub plan_status: PlanStatus,
}

impl Orchestrator {
    /// Records the outcome of an externally executed subtask.
    ///
    /// The named subtask's status, result, and error are overwritten from
    /// the call's values: last write wins, with no concurrency token and no
    /// requirement that the subtask was dispatched first. Empty result text
    /// is stored as absent. The overall plan status is re-derived and stored
    /// before the call returns.
    ///
    /// No dispatch pass is triggered: subtasks that became eligible through
    /// this submission wait for an explicit dispatch call.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::InvalidInput` - outcome status is neither
    ///   'completed' nor 'failed'
    /// * `OrchestratorError::PlanNotFound` - unknown plan identifier
    /// * `OrchestratorError::SubtaskNotFound` - known plan, unknown subtask
    pub async fn submit_result(&self, params: &SubmitResult) -> Result<SubmitOutcome> {
        let outcome = params.validate()?;

        self.store
            .with_plan_mut(&params.plan_id, |plan| {
                let plan_id = plan.id.clone();
                let subtask = plan.subtask_mut(&params.subtask_id).ok_or_else(|| {
                    OrchestratorError::SubtaskNotFound {
                        plan_id: plan_id.clone(),
                        subtask_id: params.subtask_id.clone(),
                    }
                })?;

                subtask.status = outcome.into();
                subtask.result = if params.result.is_empty() {
                    None
                } else {
                    Some(params.result.clone())
                };
                subtask.error = params.error.clone();
                let new_status = subtask.status;

                plan.status = aggregate_status(&plan.subtasks);

                Ok(SubmitOutcome {
                    plan_id,
                    subtask_id: params.subtask_id.clone(),
                    new_status,
                    plan_status: plan.status,
                })
            })
            .await
    }
}
