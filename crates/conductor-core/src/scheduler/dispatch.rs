//! Dependency resolution and batch dispatch.

use std::collections::HashSet;

use super::{aggregate::aggregate_status, Orchestrator};
use crate::{
    error::Result,
    models::{Plan, SubtaskStatus},
    params::PlanRef,
};

/// Outcome of one dispatch call: the subtasks newly released for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Identifier of the dispatched plan
    pub plan_id: String,
    /// Identifiers transitioned pending → dispatched by this call, in
    /// creation order. Empty when nothing was newly eligible.
    pub dispatched: Vec<String>,
}

/// Returns the subtasks eligible for dispatch in a plan snapshot.
///
/// A subtask is eligible when it is pending and every one of its
/// dependencies is completed. Dispatched dependencies do not count:
/// eligibility requires observed completion, never mere release.
///
/// The scan is a pure function of the snapshot, so applying its batch can
/// never cascade across dependency levels within a single call.
pub fn eligible_subtasks(plan: &Plan) -> Vec<String> {
    let completed: HashSet<&str> = plan
        .subtasks
        .iter()
        .filter(|s| s.status == SubtaskStatus::Completed)
        .map(|s| s.id.as_str())
        .collect();

    plan.subtasks
        .iter()
        .filter(|s| {
            s.status == SubtaskStatus::Pending
                && s.dependencies.iter().all(|d| completed.contains(d.as_str()))
        })
        .map(|s| s.id.clone())
        .collect()
}

impl Orchestrator {
    /// Releases every currently eligible subtask for external execution.
    ///
    /// The eligible set is computed from one consistent snapshot and applied
    /// as a single batch under the store lock. Re-dispatching is a no-op by
    /// construction: only pending subtasks are ever eligible, so calling
    /// dispatch repeatedly without intervening submissions returns an empty
    /// batch after the first call.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::PlanNotFound` - when the identifier is unknown
    pub async fn dispatch(&self, params: &PlanRef) -> Result<DispatchOutcome> {
        self.store
            .with_plan_mut(&params.plan_id, |plan| {
                let ready = eligible_subtasks(plan);
                let ready_set: HashSet<&str> = ready.iter().map(String::as_str).collect();

                for subtask in &mut plan.subtasks {
                    if ready_set.contains(subtask.id.as_str()) {
                        subtask.status = SubtaskStatus::Dispatched;
                    }
                }
                plan.status = aggregate_status(&plan.subtasks);

                Ok(DispatchOutcome {
                    plan_id: plan.id.clone(),
                    dispatched: ready,
                })
            })
            .await
    }
}
