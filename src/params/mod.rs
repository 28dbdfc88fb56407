//! Tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// For tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PersonScheduleParams {
    #[schemars(description = "GitHub login of the person")]
    pub login: String,
    #[schemars(description = "Number of days to look ahead (default: 7)")]
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CalendarEventsParams {
    #[schemars(description = "Organization that owns the project (defaults to the configured organization)")]
    pub org: Option<String>,
    #[schemars(description = "Projects v2 board number (defaults to the configured project)")]
    pub project: Option<u32>,
    #[schemars(description = "Only consider issues created on or after this date (YYYY-MM-DD)")]
    pub since: Option<String>,
    #[schemars(description = "Only return events assigned to this login")]
    pub assignee: Option<String>,
}
