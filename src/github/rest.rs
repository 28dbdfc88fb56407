//! REST wire types for the issue-search fallback path
//!
//! Structs mirror the JSON returned by `GET /search/issues`. The fallback
//! carries no project custom fields, so records from this path resolve
//! dates from issue bodies and milestones only. Timestamps stay as the
//! ISO 8601 strings GitHub sends; date parsing happens downstream.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchIssuesResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<RestIssue>,
}

/// A GitHub issue as returned by the search API
#[derive(Debug, Deserialize)]
pub struct RestIssue {
    pub node_id: String,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    pub html_url: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub user: Option<RestUser>,
    #[serde(default)]
    pub labels: Vec<RestLabel>,
    #[serde(default)]
    pub assignees: Vec<RestUser>,
    #[serde(default)]
    pub milestone: Option<RestMilestone>,
}

#[derive(Debug, Deserialize)]
pub struct RestUser {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestLabel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestMilestone {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_on: Option<String>,
}
