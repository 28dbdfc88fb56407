//! GraphQL wire types for the Projects v2 primary data path
//!
//! Structs mirror the JSON shape returned by the GitHub GraphQL API for the
//! project-items query, including the `__typename`-tagged field value union.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query for all items of an organization project, with issue content and
/// custom field values. Paginated via `$cursor`.
pub const PROJECT_ITEMS_QUERY: &str = r#"
query($org: String!, $number: Int!, $cursor: String) {
  organization(login: $org) {
    projectV2(number: $number) {
      items(first: 100, after: $cursor) {
        pageInfo { hasNextPage endCursor }
        nodes {
          id
          content {
            __typename
            ... on Issue {
              id
              number
              title
              body
              state
              url
              createdAt
              updatedAt
              closedAt
              author { login avatarUrl }
              labels(first: 20) { nodes { id name color description } }
              assignees(first: 10) { nodes { login avatarUrl } }
              milestone { title description dueOn }
            }
          }
          fieldValues(first: 20) {
            nodes {
              __typename
              ... on ProjectV2ItemFieldDateValue {
                date
                field { ... on ProjectV2FieldCommon { name } }
              }
              ... on ProjectV2ItemFieldTextValue {
                text
                field { ... on ProjectV2FieldCommon { name } }
              }
              ... on ProjectV2ItemFieldSingleSelectValue {
                name
                field { ... on ProjectV2FieldCommon { name } }
              }
              ... on ProjectV2ItemFieldNumberValue {
                number
                field { ... on ProjectV2FieldCommon { name } }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Generic GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectItemsData {
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct Organization {
    #[serde(rename = "projectV2")]
    pub project: Option<ProjectV2>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectV2 {
    pub items: ItemConnection,
}

#[derive(Debug, Deserialize)]
pub struct ItemConnection {
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub nodes: Vec<ProjectItemNode>,
}

/// Cursor-based pagination info
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// One row of the project board: wrapped content plus custom field values
#[derive(Debug, Deserialize)]
pub struct ProjectItemNode {
    pub id: String,
    pub content: Option<RawContent>,
    #[serde(rename = "fieldValues", default)]
    pub field_values: Option<FieldValueConnection>,
}

/// Project item content union. Draft issues and pull requests are carried
/// by the board too; only issues are consumed downstream.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum RawContent {
    Issue(IssueContent),
    #[serde(other)]
    Other,
}

/// Issue fields as selected by [`PROJECT_ITEMS_QUERY`]
#[derive(Debug, Deserialize)]
pub struct IssueContent {
    pub id: String,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "closedAt", default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub author: Option<GqlUser>,
    #[serde(default)]
    pub labels: Option<NodeList<GqlLabel>>,
    #[serde(default)]
    pub assignees: Option<NodeList<GqlUser>>,
    #[serde(default)]
    pub milestone: Option<GqlMilestone>,
}

/// Connection wrapper: `{ nodes: [...] }`
#[derive(Debug, Deserialize)]
pub struct NodeList<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GqlUser {
    pub login: String,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GqlLabel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GqlMilestone {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dueOn", default)]
    pub due_on: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FieldValueConnection {
    #[serde(default)]
    pub nodes: Vec<RawFieldValue>,
}

/// Custom field value union, tagged by GraphQL `__typename`.
///
/// Board rows carry a handful of other value kinds (iteration, labels,
/// reviewers); those deserialize to `Other` and are ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum RawFieldValue {
    #[serde(rename = "ProjectV2ItemFieldDateValue")]
    Date {
        #[serde(default)]
        date: Option<NaiveDate>,
        #[serde(default)]
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        field: Option<FieldRef>,
    },
    #[serde(rename = "ProjectV2ItemFieldNumberValue")]
    Number {
        #[serde(default)]
        number: Option<f64>,
        #[serde(default)]
        field: Option<FieldRef>,
    },
    #[serde(other)]
    Other,
}

/// The `field { name }` sub-object shared by all field value kinds
#[derive(Debug, Deserialize)]
pub struct FieldRef {
    #[serde(default)]
    pub name: Option<String>,
}
