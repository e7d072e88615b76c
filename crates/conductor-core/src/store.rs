//! In-memory plan storage.
//!
//! The store owns every [`Plan`] aggregate and is the only place plans are
//! mutated. It is an explicit object constructed by the host and handed to
//! the orchestrator, never a process-wide singleton, so tests and embedding
//! applications get isolation for free via [`PlanStore::clear`] or simply a
//! fresh store.
//!
//! A single async mutex guards the plan map. Mutating operations run a
//! closure under that lock, which makes each operation's read-compute-write
//! sequence atomic per plan: two concurrent dispatch calls, or a dispatch
//! racing a submit_result, serialize instead of interleaving.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::{
    error::{OrchestratorError, Result},
    models::Plan,
};

/// Owner of the plan-id → [`Plan`] mapping.
pub struct PlanStore {
    plans: Mutex<HashMap<String, Plan>>,
    next_plan: AtomicU64,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            plans: Mutex::new(HashMap::new()),
            next_plan: AtomicU64::new(1),
        }
    }

    /// Allocates the next plan identifier.
    ///
    /// Identifiers come from a monotonic counter, never from map size, so
    /// they remain unique across [`PlanStore::clear`] calls within one store
    /// lifetime.
    pub fn allocate_plan_id(&self) -> String {
        let n = self.next_plan.fetch_add(1, Ordering::Relaxed);
        format!("plan-{n}")
    }

    /// Stores a new plan under its identifier.
    pub async fn insert(&self, plan: Plan) {
        self.plans.lock().await.insert(plan.id.clone(), plan);
    }

    /// Returns a cloned snapshot of a plan.
    pub async fn get(&self, id: &str) -> Option<Plan> {
        self.plans.lock().await.get(id).cloned()
    }

    /// Runs a closure against a plan while holding the store lock.
    ///
    /// The closure may mutate the plan in place; the whole read-compute-write
    /// sequence is atomic with respect to every other store operation.
    ///
    /// # Errors
    ///
    /// * `OrchestratorError::PlanNotFound` - when no plan has the identifier
    pub async fn with_plan_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Plan) -> Result<T>,
    ) -> Result<T> {
        let mut plans = self.plans.lock().await;
        let plan = plans
            .get_mut(id)
            .ok_or_else(|| OrchestratorError::PlanNotFound { id: id.to_string() })?;
        f(plan)
    }

    /// Removes every stored plan. Intended for test isolation and host
    /// resets; plan-id allocation is not rewound.
    pub async fn clear(&self) {
        self.plans.lock().await.clear();
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.plans.lock().await.len()
    }

    /// Whether the store holds no plans.
    pub async fn is_empty(&self) -> bool {
        self.plans.lock().await.is_empty()
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
