//! Workload analysis and assignee recommendation handlers

use chrono::Utc;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::pipeline::aggregate_workload;
use crate::render;

use super::{error_result, load_events};

/// Ranked workload table across all assignees, lightest first
pub async fn analyze_workload(
    client: &GitHubClient,
    config: &Config,
) -> Result<CallToolResult, McpError> {
    let events = match load_events(client, config).await {
        Ok(events) => events,
        Err(e) => return Ok(error_result(e)),
    };

    let entries = aggregate_workload(&events, Utc::now());

    let text = render::text::workload_analysis(&entries);
    let html = render::html::workload_table(&entries);
    Ok(CallToolResult::success(vec![
        Content::text(text),
        Content::text(html),
    ]))
}

/// Recommend the assignee with the lightest current workload
pub async fn find_best_assignee(
    client: &GitHubClient,
    config: &Config,
) -> Result<CallToolResult, McpError> {
    let events = match load_events(client, config).await {
        Ok(events) => events,
        Err(e) => return Ok(error_result(e)),
    };

    let entries = aggregate_workload(&events, Utc::now());

    let text = render::text::best_assignee(&entries);
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
