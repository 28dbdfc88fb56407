//! Per-person schedule handler

use chrono::{Days, Utc};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::params::PersonScheduleParams;
use crate::render;

use super::{error_result, load_events};

const DEFAULT_DAYS: u32 = 7;

/// Events assigned to one person whose span intersects the coming days
pub async fn person_schedule(
    client: &GitHubClient,
    config: &Config,
    params: PersonScheduleParams,
) -> Result<CallToolResult, McpError> {
    let days = params.days.unwrap_or(DEFAULT_DAYS);

    let events = match load_events(client, config).await {
        Ok(events) => events,
        Err(e) => return Ok(error_result(e)),
    };

    let today = Utc::now().date_naive();
    let horizon = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(today);

    let mut mine: Vec<_> = events
        .into_iter()
        .filter(|e| e.is_assigned_to(&params.login))
        .filter(|e| e.start_date < horizon && e.effective_end() >= today)
        .collect();
    mine.sort_by_key(|e| e.start_date);

    let text = render::text::person_schedule(&params.login, days, &mine);
    let html = render::html::schedule_list(&params.login, &mine);
    Ok(CallToolResult::success(vec![
        Content::text(text),
        Content::text(html),
    ]))
}
