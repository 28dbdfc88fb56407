//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes team calendar and
//! workload operations as tools. Handler implementations are in the
//! handlers/ module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::config::Config;
use crate::github::{GitHubClient, GitHubResult};
use crate::handlers;
use crate::params::*;

/// The main Team Pulse MCP Server
///
/// Holds the GitHub client and the configured project defaults; every tool
/// invocation fetches fresh data and rebuilds its aggregates from scratch.
#[derive(Clone)]
pub struct TeamPulseMcpServer {
    client: GitHubClient,
    config: Config,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TeamPulseMcpServer {
    /// Build the server. Fails when no GitHub credential is configured.
    pub fn new(config: Config) -> GitHubResult<Self> {
        let client = GitHubClient::new(&config)?;
        Ok(Self {
            client,
            config,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        description = "Get current team status: open events per member with workload bands and completed-issue history. Returns a text summary and an HTML dashboard."
    )]
    async fn get_team_status(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::team_status(&self.client, &self.config).await
    }

    #[tool(
        description = "Get one person's schedule: their events over the coming days (default 7). Returns a text listing and an HTML schedule view."
    )]
    async fn get_person_schedule(
        &self,
        Parameters(params): Parameters<PersonScheduleParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::person_schedule(&self.client, &self.config, params).await
    }

    #[tool(
        description = "Analyze team workload: per-assignee open/upcoming/overdue counts ranked lightest first. Returns a text ranking and an HTML table."
    )]
    async fn analyze_workload(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::analyze_workload(&self.client, &self.config).await
    }

    #[tool(
        description = "Recommend the team member with the lightest current workload for new work"
    )]
    async fn find_best_assignee(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::find_best_assignee(&self.client, &self.config).await
    }

    #[tool(
        description = "Get calendar events for a project board, with optional org/project/since/assignee overrides. Returns a text summary, the events as JSON, and an HTML month calendar."
    )]
    async fn get_calendar_events(
        &self,
        Parameters(params): Parameters<CalendarEventsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::calendar_events(&self.client, &self.config, params).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for TeamPulseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Team Pulse MCP Server - reads a GitHub Projects board and provides \
                 team calendar events, per-person schedules, and workload analysis. \
                 Requires GITHUB_TOKEN with repo and project scopes."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
