//! Team status handler

use chrono::Utc;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use tracing::warn;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::pipeline::aggregate_workload;
use crate::render;
use crate::types::MemberStatus;

use super::{error_result, load_events};

/// Current team status: per-member counters plus completed-issue history,
/// as a text summary and an HTML dashboard.
pub async fn team_status(
    client: &GitHubClient,
    config: &Config,
) -> Result<CallToolResult, McpError> {
    let events = match load_events(client, config).await {
        Ok(events) => events,
        Err(e) => return Ok(error_result(e)),
    };

    let entries = aggregate_workload(&events, Utc::now());

    let mut members = Vec::with_capacity(entries.len());
    for entry in entries {
        // Completed-count lookups fail independently per person; a failure
        // becomes zero instead of sinking the whole aggregate.
        let completed_issues = match client
            .completed_issue_count(&config.github.organization, &entry.login)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                warn!(login = %entry.login, error = %e, "completed-issue lookup failed, reporting zero");
                0
            }
        };
        members.push(MemberStatus {
            entry,
            completed_issues,
        });
    }

    let text = render::text::team_status(&members, events.len());
    let html = render::html::team_dashboard(&members);
    Ok(CallToolResult::success(vec![
        Content::text(text),
        Content::text(html),
    ]))
}
