//! Async GitHub API client
//!
//! One client per server process. The primary data path is the GraphQL
//! Projects v2 items query; when it fails for any reason (network, auth,
//! unknown org/project) the client falls back exactly once to a REST issue
//! search filtered by label and creation date. Pagination is strictly
//! sequential on both paths: each page's cursor comes from the previous
//! response.

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::types::{FieldValue, Issue, ProjectItem};

use super::error::{GitHubError, GitHubResult};
use super::graphql::{GraphqlResponse, ProjectItemsData, RawContent, PROJECT_ITEMS_QUERY};
use super::rest::SearchIssuesResponse;

const GRAPHQL_URL: &str = "https://api.github.com/graphql";
const SEARCH_URL: &str = "https://api.github.com/search/issues";
const USER_AGENT: &str = concat!("team-pulse-mcp/", env!("CARGO_PKG_VERSION"));

/// Search results are paged 100 at a time; the search API stops serving
/// past 1000 results regardless.
const SEARCH_PAGE_SIZE: usize = 100;
const SEARCH_MAX_PAGES: usize = 10;

/// GitHub API client holding the HTTP connection pool and credential
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    token: String,
}

impl GitHubClient {
    /// Build a client from configuration. Fails when no token is set;
    /// every upstream call requires the credential.
    pub fn new(config: &Config) -> GitHubResult<Self> {
        let token = config.token.clone().ok_or(GitHubError::MissingToken)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, token })
    }

    /// Fetch all issue rows of an organization project via GraphQL,
    /// following the item cursor until exhausted.
    #[instrument(skip(self))]
    pub async fn fetch_project_items(
        &self,
        org: &str,
        project_number: u32,
    ) -> GitHubResult<Vec<ProjectItem>> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            debug!(?cursor, "fetching project items page");

            let body = json!({
                "query": PROJECT_ITEMS_QUERY,
                "variables": { "org": org, "number": project_number, "cursor": &cursor },
            });

            let response = self
                .http
                .post(GRAPHQL_URL)
                .bearer_auth(&self.token)
                .json(&body)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(GitHubError::Status { status, body });
            }

            let envelope: GraphqlResponse<ProjectItemsData> = response.json().await?;

            if let Some(errors) = envelope.errors {
                let message = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(GitHubError::Graphql(message));
            }

            let connection = envelope
                .data
                .and_then(|d| d.organization)
                .and_then(|o| o.project)
                .map(|p| p.items)
                .ok_or_else(|| {
                    GitHubError::Graphql(format!(
                        "project {} not found in organization {}",
                        project_number, org
                    ))
                })?;

            for node in connection.nodes {
                let Some(RawContent::Issue(content)) = node.content else {
                    continue;
                };
                let fields = node
                    .field_values
                    .map(|fv| fv.nodes.into_iter().filter_map(FieldValue::from_raw).collect())
                    .unwrap_or_default();
                items.push(ProjectItem {
                    issue: Issue::from_graphql(content),
                    fields,
                });
            }

            if !connection.page_info.has_next_page {
                break;
            }
            cursor = connection.page_info.end_cursor;
        }

        debug!(count = items.len(), "fetched project items");
        Ok(items)
    }

    /// Fallback path: search issues by label and creation-date lower bound.
    /// Records from here carry no custom field values.
    #[instrument(skip(self))]
    pub async fn search_issues(
        &self,
        org: &str,
        label: &str,
        since: NaiveDate,
    ) -> GitHubResult<Vec<ProjectItem>> {
        let query = format!(
            "org:{} label:\"{}\" is:issue created:>={}",
            org,
            label,
            since.format("%Y-%m-%d")
        );

        let mut items = Vec::new();

        for page in 1..=SEARCH_MAX_PAGES {
            debug!(page, "fetching search page");

            let page_str = page.to_string();
            let response = self
                .http
                .get(SEARCH_URL)
                .bearer_auth(&self.token)
                .header("Accept", "application/vnd.github+json")
                .query(&[
                    ("q", query.as_str()),
                    ("per_page", "100"),
                    ("page", page_str.as_str()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(GitHubError::Status { status, body });
            }

            let parsed: SearchIssuesResponse = response.json().await?;
            let page_len = parsed.items.len();

            items.extend(parsed.items.into_iter().map(|raw| ProjectItem {
                issue: Issue::from_rest(raw),
                fields: Vec::new(),
            }));

            if page_len < SEARCH_PAGE_SIZE || items.len() as u64 >= parsed.total_count {
                break;
            }
        }

        debug!(count = items.len(), "fetched search results");
        Ok(items)
    }

    /// Fetch project issue rows, falling back once from GraphQL to the REST
    /// search when the primary path fails for any reason.
    pub async fn fetch_issues(
        &self,
        org: &str,
        project_number: u32,
        label: &str,
        since: NaiveDate,
    ) -> GitHubResult<Vec<ProjectItem>> {
        match self.fetch_project_items(org, project_number).await {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(error = %e, "project query failed, falling back to issue search");
                self.search_issues(org, label, since).await
            }
        }
    }

    /// Count closed issues assigned to a login across the organization.
    /// Only the search `total_count` is consumed; callers treat a failure
    /// here as zero rather than aborting their aggregate.
    #[instrument(skip(self))]
    pub async fn completed_issue_count(&self, org: &str, login: &str) -> GitHubResult<u64> {
        let query = format!("org:{} assignee:{} is:issue is:closed", org, login);

        let response = self
            .http
            .get(SEARCH_URL)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .query(&[("q", query.as_str()), ("per_page", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Status { status, body });
        }

        let parsed: SearchIssuesResponse = response.json().await?;
        Ok(parsed.total_count)
    }
}
