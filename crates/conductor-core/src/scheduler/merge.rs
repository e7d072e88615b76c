//! Topological ordering and result concatenation for completed plans.

use std::collections::{HashMap, HashSet};

use super::Orchestrator;
use crate::{
    error::{OrchestratorError, Result},
    models::{Plan, PlanStatus},
    params::PlanRef,
};

/// Merged output of a completed plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedResult {
    /// Identifier of the merged plan
    pub plan_id: String,
    /// Subtask identifiers in merge order
    pub subtask_ids: Vec<String>,
    /// Concatenated result texts in merge order
    pub text: String,
}

/// Computes a deterministic topological ordering of a plan's subtasks.
///
/// Returns positions into `plan.subtasks`. Every subtask appears after all
/// of its dependencies; among the subtasks whose dependencies are already
/// placed, the earliest-created one is always picked next, so the ordering
/// is unique for a given plan. Dependencies that resolve to no subtask are
/// ignored here (creation already validated them).
///
/// If a dependency cycle leaves subtasks unplaceable, the remainder is
/// appended in creation order. A cyclic plan can never complete through
/// dispatch, but direct submissions can complete one, and merge output must
/// stay deterministic even then.
pub fn merge_order(plan: &Plan) -> Vec<usize> {
    let index: HashMap<&str, usize> = plan
        .subtasks
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();

    let mut placed: HashSet<usize> = HashSet::new();
    let mut order = Vec::with_capacity(plan.subtasks.len());

    while order.len() < plan.subtasks.len() {
        let next = plan.subtasks.iter().enumerate().find(|(i, s)| {
            !placed.contains(i)
                && s.dependencies
                    .iter()
                    .filter_map(|d| index.get(d.as_str()))
                    .all(|dep| placed.contains(dep))
        });

        match next {
            Some((i, _)) => {
                placed.insert(i);
                order.push(i);
            }
            None => {
                // Cycle: emit whatever is left in creation order.
                for i in 0..plan.subtasks.len() {
                    if !placed.contains(&i) {
                        order.push(i);
                    }
                }
                break;
            }
        }
    }

    order
}

impl Orchestrator {
    /// Merges a completed plan's subtask results into one ordered text.
    ///
    /// Results are concatenated in the [`merge_order`] sequence, separated
    /// by blank lines. Repeated merges of the same completed plan are
    /// byte-identical.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::PlanNotFound` - when the identifier is unknown
    /// * `OrchestratorError::PlanNotCompleted` - when any subtask has not
    ///   completed
    pub async fn merge(&self, params: &PlanRef) -> Result<MergedResult> {
        let plan = self.plan_status(params).await?;

        if plan.status != PlanStatus::Completed {
            return Err(OrchestratorError::PlanNotCompleted {
                id: plan.id,
                status: plan.status,
            });
        }

        let order = merge_order(&plan);
        let subtask_ids = order
            .iter()
            .map(|&i| plan.subtasks[i].id.clone())
            .collect();
        let text = order
            .iter()
            .map(|&i| plan.subtasks[i].result.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(MergedResult {
            plan_id: plan.id,
            subtask_ids,
            text,
        })
    }
}
