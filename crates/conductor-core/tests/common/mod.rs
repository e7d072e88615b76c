use std::sync::Arc;

use conductor_core::{Orchestrator, OrchestratorBuilder, PlanStore};

/// Helper function to create a test orchestrator over a host-owned store
pub fn create_test_orchestrator() -> (Arc<PlanStore>, Orchestrator) {
    let store = Arc::new(PlanStore::new());
    let orchestrator = OrchestratorBuilder::new()
        .with_store(Arc::clone(&store))
        .build();
    (store, orchestrator)
}
