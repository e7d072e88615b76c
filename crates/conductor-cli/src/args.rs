use clap::{Parser, Subcommand};

/// Command-line interface for the Conductor orchestrator
///
/// Conductor is a dependency-graph task orchestrator: it decomposes an
/// objective into subtasks with declared dependencies, releases subtasks for
/// execution as their dependencies complete, and merges the results into one
/// deterministically ordered output. The orchestrator state is in-memory and
/// lives for the duration of the process, so the binary runs as an MCP
/// (Model Context Protocol) server over stdio for AI agent integration.
#[derive(Parser)]
#[command(version, about, name = "conductor")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Conductor CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server (the default when no command is given)
    Serve,
}
