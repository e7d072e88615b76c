//! Plan creation with batch dependency validation.

use std::collections::HashSet;

use jiff::Timestamp;

use super::Orchestrator;
use crate::{
    error::{OrchestratorError, Result},
    models::{Plan, PlanStatus, Subtask, SubtaskStatus},
    params::CreatePlan,
};

impl Orchestrator {
    /// Creates a new plan from an ordered batch of subtask descriptors.
    ///
    /// Identifiers "subtask-1".."subtask-N" are assigned in input order
    /// before dependencies are validated, so a dependency may reference any
    /// subtask of the same batch, including one declared later. The first
    /// dependency that does not resolve rejects the whole call; nothing is
    /// stored on any error path.
    ///
    /// Returns a snapshot of the stored plan, with every subtask pending.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::InvalidInput` - blank description or empty
    ///   subtask list
    /// * `OrchestratorError::UnknownDependency` - a dependency names no
    ///   subtask in the batch
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        if params.description.trim().is_empty() {
            return Err(OrchestratorError::invalid_input("description")
                .with_reason("Plan description must not be empty"));
        }
        if params.subtasks.is_empty() {
            return Err(OrchestratorError::invalid_input("subtasks")
                .with_reason("A plan requires at least one subtask"));
        }

        // Assign identifiers to the whole batch first.
        let subtasks: Vec<Subtask> = params
            .subtasks
            .iter()
            .enumerate()
            .map(|(i, spec)| Subtask {
                id: format!("subtask-{}", i + 1),
                description: spec.description.clone(),
                dependencies: spec.dependencies.clone(),
                status: SubtaskStatus::Pending,
                result: None,
                error: None,
            })
            .collect();

        let known: HashSet<&str> = subtasks.iter().map(|s| s.id.as_str()).collect();
        for subtask in &subtasks {
            if subtask.description.trim().is_empty() {
                return Err(OrchestratorError::invalid_input("subtasks")
                    .with_reason(format!("Subtask '{}' has an empty description", subtask.id)));
            }
            for dependency in &subtask.dependencies {
                if !known.contains(dependency.as_str()) {
                    return Err(OrchestratorError::UnknownDependency {
                        subtask_id: subtask.id.clone(),
                        dependency_id: dependency.clone(),
                    });
                }
            }
        }

        let next_subtask = subtasks.len() as u64 + 1;
        let plan = Plan {
            id: self.store.allocate_plan_id(),
            description: params.description.clone(),
            context: params.context.clone(),
            subtasks,
            status: PlanStatus::Pending,
            created_at: Timestamp::now(),
            next_subtask,
        };

        let snapshot = plan.clone();
        self.store.insert(plan).await;
        Ok(snapshot)
    }
}
