//! Team Pulse MCP Server
//!
//! Exposes a GitHub Projects board as MCP tools for an AI assistant:
//! team status, per-person schedules, workload analysis, assignee
//! recommendation, and calendar events with HTML views.
//!
//! # Requirements
//!
//! - `GITHUB_TOKEN` environment variable with repo and project scopes
//!
//! # Usage
//!
//! Run directly:
//! ```bash
//! team-pulse-mcp
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "team-pulse": {
//!       "command": "team-pulse-mcp",
//!       "env": { "GITHUB_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use team_pulse_mcp::{Config, TeamPulseMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive("team_pulse_mcp=info".parse()?))
        .init();

    tracing::info!("Starting Team Pulse MCP Server");

    let config = Config::load()?;
    tracing::info!(
        "Project defaults: org={} project={} label={}",
        config.github.organization,
        config.github.project_number,
        config.github.label
    );

    let server = TeamPulseMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
