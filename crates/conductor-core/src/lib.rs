//! Core library for the Conductor task orchestrator.
//!
//! This crate provides the scheduling logic for dependency-graph plans:
//! creating a plan from an ordered batch of subtasks, resolving which
//! subtasks are eligible for dispatch, aggregating subtask outcomes into an
//! overall plan status, and merging completed results into one
//! deterministically ordered output.
//!
//! State lives in an explicit in-memory [`PlanStore`] owned by the host;
//! there is no persistence and no process-wide singleton. Rendering is kept
//! in [`display`], separate from the state machine, so scheduling behavior
//! is testable without string matching.
//!
//! # Quick Start
//!
//! ```rust
//! use conductor_core::{
//!     params::{CreatePlan, PlanRef, SubtaskSpec},
//!     OrchestratorBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = OrchestratorBuilder::new().build();
//!
//! // Decompose an objective into dependent subtasks
//! let plan = orchestrator
//!     .create_plan(&CreatePlan {
//!         description: "Ship the release".to_string(),
//!         subtasks: vec![
//!             SubtaskSpec {
//!                 description: "Run the test suite".to_string(),
//!                 dependencies: vec![],
//!             },
//!             SubtaskSpec {
//!                 description: "Tag and publish".to_string(),
//!                 dependencies: vec!["subtask-1".to_string()],
//!             },
//!         ],
//!         context: None,
//!     })
//!     .await?;
//!
//! // Release whatever is currently unblocked
//! let round = orchestrator
//!     .dispatch(&PlanRef {
//!         plan_id: plan.id.clone(),
//!     })
//!     .await?;
//! assert_eq!(round.dispatched, vec!["subtask-1".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use display::{CreatedPlan, DispatchRound, MergeReport, StatusReport, SubmitAck};
pub use error::{OrchestratorError, Result};
pub use models::{Outcome, Plan, PlanStatus, PlanSummary, Subtask, SubtaskStatus};
pub use params::{CreatePlan, PlanRef, SubmitResult, SubtaskSpec};
pub use scheduler::{
    aggregate::aggregate_status,
    dispatch::{eligible_subtasks, DispatchOutcome},
    merge::{merge_order, MergedResult},
    submit::SubmitOutcome,
    Orchestrator, OrchestratorBuilder,
};
pub use store::PlanStore;
