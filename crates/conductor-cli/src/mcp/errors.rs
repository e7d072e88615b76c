//! Error handling utilities for MCP server

use conductor_core::OrchestratorError;
use rmcp::ErrorData;

/// Helper to convert orchestrator errors to MCP errors
///
/// Validation failures surface as invalid-params so callers can fix their
/// payload; missing plans/subtasks and the merge precondition map to
/// internal errors carrying the typed message.
pub fn to_mcp_error(message: &str, error: &OrchestratorError) -> ErrorData {
    let detail = format!("{message}: {error}");
    match error {
        OrchestratorError::UnknownDependency { .. } | OrchestratorError::InvalidInput { .. } => {
            ErrorData::invalid_params(detail, None)
        }
        _ => ErrorData::internal_error(detail, None),
    }
}
