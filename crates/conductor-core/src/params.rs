//! Parameter structures for orchestrator operations.
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (MCP, future CLI or REST surfaces) without
//! framework-specific derives or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Core parameter types carry only `serde` derives (plus `schemars` behind
//! the `schema` feature). Interface layers wrap them in transparent newtypes
//! that add whatever framework derives they need:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   MCP Params    │    │  Core Params    │    │  Orchestrator   │
//! │ (serde/schemars)│───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! This keeps the scheduling core free of transport concerns while each
//! interface still gets compile-time checked conversions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Outcome;

/// Generic parameters for operations addressing a single plan.
///
/// Used for dispatch, plan_status, and merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRef {
    /// Identifier of the plan to operate on
    pub plan_id: String,
}

/// Descriptor for one subtask supplied at plan creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubtaskSpec {
    /// Description of the subtask (required)
    pub description: String,
    /// Identifiers of subtasks in the same call that must complete first.
    /// Identifiers are assigned "subtask-1".."subtask-N" in input order
    /// before validation, so a dependency may name any subtask in the batch.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Description of the overall objective (required)
    pub description: String,
    /// Ordered subtask descriptors; at least one is required
    pub subtasks: Vec<SubtaskSpec>,
    /// Optional free-text context stored alongside the plan
    pub context: Option<String>,
}

/// Parameters for reporting a subtask outcome.
///
/// The outcome status arrives as text from the transport layer and is
/// validated into the closed [`Outcome`] enum before the store is touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitResult {
    /// Identifier of the plan containing the subtask
    pub plan_id: String,
    /// Identifier of the subtask being resolved
    pub subtask_id: String,
    /// Outcome status: 'completed' or 'failed'
    pub status: String,
    /// Result text recorded on the subtask
    #[serde(default)]
    pub result: String,
    /// Optional error text, meaningful for failed outcomes
    pub error: Option<String>,
}

impl SubmitResult {
    /// Validate the reported outcome status.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::InvalidInput` - when the status string is
    ///   neither 'completed' nor 'failed'
    pub fn validate(&self) -> crate::Result<Outcome> {
        self.status
            .parse::<Outcome>()
            .map_err(|_| crate::OrchestratorError::InvalidInput {
                field: "status".to_string(),
                reason: format!(
                    "Invalid outcome status: {}. Must be 'completed' or 'failed'",
                    self.status
                ),
            })
    }
}
