//! MCP server implementation for Conductor
//!
//! This module implements the Model Context Protocol server for Conductor,
//! exposing the five orchestration operations as tools for AI agents. The
//! core stays transport-agnostic; tool names and rendered text are bound
//! here.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use conductor_core::Orchestrator;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{CreatePlan, McpResult, PlanRef, SubmitResult};

/// MCP server for Conductor
#[derive(Clone)]
pub struct ConductorMcpServer {
    orchestrator: Arc<Orchestrator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ConductorMcpServer {
    /// Create a new Conductor MCP server
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "create_plan",
        description = "Create a new plan from an objective decomposed into subtasks. Each subtask needs a description and may declare dependencies on other subtasks of the same call by identifier ('subtask-1'..'subtask-N', assigned in input order). A dependency naming no subtask in the batch rejects the whole call and stores nothing. Returns the plan ID and the per-subtask summary."
    )]
    async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.orchestrator.clone());
        handlers.create_plan(&params).await
    }

    #[tool(
        name = "dispatch",
        description = "Release every subtask whose dependencies have all completed. Returns the identifiers newly marked dispatched; an empty list means nothing new is eligible (not an error). Dispatch never cascades: results submitted during this call's batch do not unlock further subtasks until the next dispatch call, so call dispatch again after submitting results."
    )]
    async fn dispatch(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.orchestrator.clone());
        handlers.dispatch(&params).await
    }

    #[tool(
        name = "plan_status",
        description = "Show a plan's overall status (pending/in_progress/completed/failed) together with the status of every subtask in creation order. Use this to decide whether to dispatch more work, wait for outstanding subtasks, or merge."
    )]
    async fn plan_status(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.orchestrator.clone());
        handlers.plan_status(&params).await
    }

    #[tool(
        name = "submit_result",
        description = "Record the outcome of an externally executed subtask. Status must be 'completed' or 'failed'; provide result text for completions and optional error text for failures. The subtask's fields are overwritten (last write wins) and the overall plan status is re-derived immediately. Submitting does NOT dispatch newly unblocked subtasks - follow up with the dispatch tool."
    )]
    async fn submit_result(&self, Parameters(params): Parameters<SubmitResult>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.orchestrator.clone());
        handlers.submit_result(&params).await
    }

    #[tool(
        name = "merge",
        description = "Concatenate the results of a completed plan in dependency order: every subtask's result appears after the results of all subtasks it depends on, with ties broken by creation order. Fails unless the plan status is 'completed'. Repeated merges return byte-identical output."
    )]
    async fn merge(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.orchestrator.clone());
        handlers.merge(&params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ConductorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "conductor".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Conductor orchestrates dependency-graph plans: an objective decomposed into subtasks that are executed externally and merged into one ordered result.

## Core Concepts
- **Plans**: One decomposed objective with an overall status derived from its subtasks
- **Subtasks**: Atomic units of work with statuses (pending/dispatched/completed/failed) and zero or more dependencies on sibling subtasks

## Workflow
1. `create_plan` with the full subtask breakdown; declare dependencies by identifier ('subtask-1', 'subtask-2', ... in input order)
2. `dispatch` to get the subtasks whose dependencies are satisfied, then execute them externally
3. `submit_result` for each finished subtask ('completed' with result text, or 'failed' with error text)
4. Repeat dispatch/submit until `plan_status` reports 'completed' (or 'failed' if any subtask failed)
5. `merge` to concatenate all results in dependency order

## Notes
- Dispatch is idempotent: already dispatched or resolved subtasks are never re-released
- Submitting a result does not auto-dispatch newly unblocked subtasks; always call dispatch again
- Plans live in memory for the lifetime of this server process"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ConductorMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Conductor MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
