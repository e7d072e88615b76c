//! Builder for creating and configuring Orchestrator instances.

use std::sync::Arc;

use super::Orchestrator;
use crate::store::PlanStore;

/// Builder for creating and configuring Orchestrator instances.
#[derive(Default)]
pub struct OrchestratorBuilder {
    store: Option<Arc<PlanStore>>,
}

impl OrchestratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Uses an existing store handle instead of creating a fresh one.
    ///
    /// Lets the host own the store (and its lifetime) while sharing it with
    /// the orchestrator, e.g. to call [`PlanStore::clear`] between tests.
    pub fn with_store(mut self, store: Arc<PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured orchestrator instance.
    pub fn build(self) -> Orchestrator {
        let store = self.store.unwrap_or_else(|| Arc::new(PlanStore::new()));
        Orchestrator::new(store)
    }
}
