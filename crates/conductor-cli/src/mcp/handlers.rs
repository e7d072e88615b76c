//! MCP tool handlers implementation

use std::sync::Arc;

use conductor_core::{
    display::{CreatedPlan, DispatchRound, MergeReport, StatusReport, SubmitAck},
    params as core, Orchestrator,
};
use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The core parameter types stay free of protocol concerns; this transparent
// wrapper adds the Deserialize and JsonSchema impls the MCP layer needs.
// #[serde(transparent)] passes serialization straight through to the wrapped
// type, so the wire format is exactly the core type's format.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type PlanRef = McpParams<core::PlanRef>;
pub type SubmitResult = McpParams<core::SubmitResult>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    orchestrator: Arc<Orchestrator>,
}

impl McpHandlers {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn create_plan(&self, params: &CreatePlan) -> McpResult {
        debug!("create_plan: {:?}", params);

        let plan = self
            .orchestrator
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        let result = CreatedPlan::new(plan);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn dispatch(&self, params: &PlanRef) -> McpResult {
        debug!("dispatch: {:?}", params);

        let outcome = self
            .orchestrator
            .dispatch(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to dispatch", &e))?;

        let result = DispatchRound::new(outcome);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn plan_status(&self, params: &PlanRef) -> McpResult {
        debug!("plan_status: {:?}", params);

        let plan = self
            .orchestrator
            .plan_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan status", &e))?;

        let result = StatusReport::new(plan);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn submit_result(&self, params: &SubmitResult) -> McpResult {
        debug!("submit_result: {:?}", params);

        let outcome = self
            .orchestrator
            .submit_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to submit result", &e))?;

        let result = SubmitAck::new(outcome);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn merge(&self, params: &PlanRef) -> McpResult {
        debug!("merge: {:?}", params);

        let merged = self
            .orchestrator
            .merge(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to merge", &e))?;

        let result = MergeReport::new(merged);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }
}
