//! Display formatting for models and operation results.
//!
//! All human-readable text lives here, split off from the scheduling state
//! machine so the scheduler can be property-tested without string matching.
//! Domain models implement [`std::fmt::Display`] directly ([`models`]), and
//! each operation has a wrapper type that formats its outcome with a
//! headline ([`results`]): "Created plan with ID: ...", "Dispatched N
//! subtask(s)", and so on.
//!
//! All formatters produce markdown, which the transport layer forwards
//! verbatim.

pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use models::LocalDateTime;
pub use results::{CreatedPlan, DispatchRound, MergeReport, StatusReport, SubmitAck};
