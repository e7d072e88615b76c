//! Conductor CLI Application
//!
//! Entry point for the Conductor orchestrator. The binary serves the five
//! orchestration operations over MCP; there are no one-shot data commands
//! because the plan store is in-memory and scoped to the process.

mod args;
mod mcp;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use conductor_core::OrchestratorBuilder;
use log::info;
use mcp::{run_stdio_server, ConductorMcpServer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { command } = Args::parse();

    let orchestrator = OrchestratorBuilder::new().build();

    info!("Conductor started");

    match command {
        Some(Commands::Serve) | None => {
            info!("Starting Conductor MCP server");
            run_stdio_server(ConductorMcpServer::new(orchestrator))
                .await
                .context("MCP server failed")
        }
    }
}
