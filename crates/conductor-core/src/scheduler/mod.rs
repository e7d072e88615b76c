//! High-level orchestrator API for dependency-graph plans.
//!
//! This module provides the main [`Orchestrator`] interface. The
//! orchestrator coordinates the plan store with the pure scheduling
//! functions, implementing the five operations the surrounding system
//! exposes to callers.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │  Pure functions │    │   Plan Store    │
//! │ (create, submit,│───▶│ (eligibility,   │───▶│  (in-memory,    │
//! │  dispatch, ...) │    │  aggregation,   │    │   lock-guarded) │
//! │                 │    │  merge order)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Orchestrator`] instances
//! - [`create`]: Plan creation with batch dependency validation
//! - [`dispatch`]: Dependency resolution and batch dispatch
//! - [`submit`]: Subtask outcome recording
//! - [`aggregate`]: Derivation of the overall plan status
//! - [`merge`]: Topological ordering and result concatenation
//!
//! ## Design Principles
//!
//! 1. **Pure core**: eligibility, aggregation, and ordering are pure
//!    functions over plan snapshots, testable without a store
//! 2. **Atomic mutations**: every read-compute-write runs under the store
//!    lock, one plan at a time
//! 3. **Typed errors**: each operation returns a success payload or one
//!    [`crate::OrchestratorError`] variant, never a panic
//! 4. **No rendering**: operations return data; all text lives in
//!    [`crate::display`]

use std::sync::Arc;

use crate::{
    error::{OrchestratorError, Result},
    models::Plan,
    params::PlanRef,
    store::PlanStore,
};

// Module declarations
pub mod aggregate;
pub mod builder;
pub mod create;
pub mod dispatch;
pub mod merge;
pub mod submit;


// Re-export the main types
pub use builder::OrchestratorBuilder;

/// Main orchestrator interface for managing dependency-graph plans.
pub struct Orchestrator {
    pub(crate) store: Arc<PlanStore>,
}

impl Orchestrator {
    /// Creates a new orchestrator over the given store.
    pub(crate) fn new(store: Arc<PlanStore>) -> Self {
        Self { store }
    }

    /// The store backing this orchestrator.
    ///
    /// Exposed so hosts can share the store across components or reset it
    /// between tests via [`PlanStore::clear`].
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Returns a snapshot of a plan: overall status plus every subtask in
    /// creation order.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::PlanNotFound` - when the identifier is unknown
    pub async fn plan_status(&self, params: &PlanRef) -> Result<Plan> {
        self.store
            .get(&params.plan_id)
            .await
            .ok_or_else(|| OrchestratorError::PlanNotFound {
                id: params.plan_id.clone(),
            })
    }
}
