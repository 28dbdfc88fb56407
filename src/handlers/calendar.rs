//! Calendar events handler

use chrono::{NaiveDate, Utc};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::params::CalendarEventsParams;
use crate::pipeline::{created_since, extract_events, project_month};
use crate::render;

use super::error_result;

/// Calendar events for a project, as a text listing, the event list as
/// JSON, and an HTML grid of the current month.
pub async fn calendar_events(
    client: &GitHubClient,
    config: &Config,
    params: CalendarEventsParams,
) -> Result<CallToolResult, McpError> {
    let gh = &config.github;
    let org = params.org.as_deref().unwrap_or(&gh.organization);
    let project = params.project.unwrap_or(gh.project_number);

    let since = match params.since.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "invalid since date '{}': expected YYYY-MM-DD",
                    raw
                ))]))
            }
        },
        None => gh.since,
    };

    let mut items = match client.fetch_issues(org, project, &gh.label, since).await {
        Ok(items) => items,
        Err(e) => return Ok(error_result(e)),
    };
    items.retain(|item| created_since(&item.issue, since));

    let mut events = extract_events(&items);
    if let Some(ref login) = params.assignee {
        events.retain(|e| e.is_assigned_to(login));
    }
    events.sort_by_key(|e| e.start_date);

    let today = Utc::now().date_naive();
    let grid = project_month(today, &events);

    let text = render::text::calendar_summary(&events, since);
    let json = serde_json::to_string_pretty(&events)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    let html = render::html::month_calendar(today, &grid);

    Ok(CallToolResult::success(vec![
        Content::text(text),
        Content::text(json),
        Content::text(html),
    ]))
}
