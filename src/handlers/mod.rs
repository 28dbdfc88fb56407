//! Handler implementations for the team-pulse tools
//!
//! Organized by concern: status, schedule, workload, calendar. Upstream
//! failures never cross the MCP boundary as raised errors; they come back
//! as error-flagged text content.

mod calendar;
mod schedule;
mod status;
mod workload;

pub use calendar::*;
pub use schedule::*;
pub use status::*;
pub use workload::*;

use rmcp::model::{CallToolResult, Content};

use crate::config::Config;
use crate::github::{GitHubClient, GitHubResult};
use crate::pipeline::{created_since, extract_events};
use crate::types::CalendarEvent;

/// Wrap an upstream failure as an error-flagged text result
pub(crate) fn error_result(e: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "GitHub data unavailable: {}",
        e
    ))])
}

/// Fetch project issues with the configured defaults and extract their
/// calendar events
pub(crate) async fn load_events(
    client: &GitHubClient,
    config: &Config,
) -> GitHubResult<Vec<CalendarEvent>> {
    let gh = &config.github;
    let mut items = client
        .fetch_issues(&gh.organization, gh.project_number, &gh.label, gh.since)
        .await?;
    items.retain(|item| created_since(&item.issue, gh.since));
    Ok(extract_events(&items))
}
