//! Normalized issue model
//!
//! Both upstream paths (GraphQL project items and REST search results) are
//! folded into one canonical [`Issue`] shape here. Missing optional
//! sub-objects become empty/neutral defaults rather than errors; the only
//! normalization applied beyond that is lowercasing the state. Timestamps
//! stay as the ISO 8601 strings GitHub sent them as - parsing them is the
//! extractor's responsibility.

use serde::{Deserialize, Serialize};

use crate::github::graphql::IssueContent;
use crate::github::rest::RestIssue;

use super::field::FieldValue;

/// A GitHub user (author or assignee)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// GitHub login/username
    pub login: String,

    /// Avatar image URL (may be empty)
    #[serde(default)]
    pub avatar_url: String,
}

/// A GitHub label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Node ID
    pub id: String,

    /// Label name
    pub name: String,

    /// Label color (hex without #)
    #[serde(default)]
    pub color: String,

    /// Label description
    #[serde(default)]
    pub description: Option<String>,
}

/// A GitHub milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title
    pub title: String,

    /// Milestone description
    #[serde(default)]
    pub description: Option<String>,

    /// Due date (ISO 8601), if one is set
    #[serde(default)]
    pub due_on: Option<String>,
}

/// A normalized GitHub issue
///
/// Built once per fetch and discarded when the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Node ID
    pub id: String,

    /// Issue number (unique within repository)
    pub number: u32,

    /// Issue title
    pub title: String,

    /// Issue body/description (markdown)
    #[serde(default)]
    pub body: Option<String>,

    /// Issue state, lowercased (open, closed)
    pub state: String,

    /// Creation timestamp (ISO 8601)
    pub created_at: String,

    /// Last update timestamp (ISO 8601)
    pub updated_at: String,

    /// Closed timestamp (ISO 8601), if closed
    #[serde(default)]
    pub closed_at: Option<String>,

    /// Issue URL on GitHub
    pub url: String,

    /// Issue author
    pub author: User,

    /// Applied labels
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Assigned users
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Associated milestone
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

impl Issue {
    /// Normalize an issue from the GraphQL project-items path
    pub fn from_graphql(content: IssueContent) -> Self {
        let author = content
            .author
            .map(|a| User {
                login: a.login,
                avatar_url: a.avatar_url.unwrap_or_default(),
            })
            .unwrap_or_else(User::unknown);

        let labels = content
            .labels
            .map(|l| {
                l.nodes
                    .into_iter()
                    .map(|n| Label {
                        id: n.id,
                        name: n.name,
                        color: n.color.unwrap_or_default(),
                        description: n.description,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let assignees = content
            .assignees
            .map(|a| {
                a.nodes
                    .into_iter()
                    .map(|n| User {
                        login: n.login,
                        avatar_url: n.avatar_url.unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let milestone = content.milestone.map(|m| Milestone {
            title: m.title,
            description: m.description,
            due_on: m.due_on,
        });

        Self {
            id: content.id,
            number: content.number,
            title: content.title,
            body: content.body,
            state: content.state.to_lowercase(),
            created_at: content.created_at,
            updated_at: content.updated_at,
            closed_at: content.closed_at,
            url: content.url,
            author,
            labels,
            assignees,
            milestone,
        }
    }

    /// Normalize an issue from the REST search fallback path
    pub fn from_rest(raw: RestIssue) -> Self {
        let author = raw
            .user
            .map(|u| User {
                login: u.login,
                avatar_url: u.avatar_url.unwrap_or_default(),
            })
            .unwrap_or_else(User::unknown);

        let labels = raw
            .labels
            .into_iter()
            .map(|l| Label {
                id: l.id.to_string(),
                name: l.name,
                color: l.color.unwrap_or_default(),
                description: l.description,
            })
            .collect();

        let assignees = raw
            .assignees
            .into_iter()
            .map(|u| User {
                login: u.login,
                avatar_url: u.avatar_url.unwrap_or_default(),
            })
            .collect();

        let milestone = raw.milestone.map(|m| Milestone {
            title: m.title,
            description: m.description,
            due_on: m.due_on,
        });

        Self {
            id: raw.node_id,
            number: raw.number,
            title: raw.title,
            body: raw.body,
            state: raw.state.to_lowercase(),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            closed_at: raw.closed_at,
            url: raw.html_url,
            author,
            labels,
            assignees,
            milestone,
        }
    }
}

impl User {
    /// Neutral placeholder for records without an author (deleted accounts)
    fn unknown() -> Self {
        Self {
            login: String::new(),
            avatar_url: String::new(),
        }
    }
}

/// One project board row: a normalized issue plus its custom field values
///
/// Records from the REST fallback carry an empty field list.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    pub issue: Issue,
    pub fields: Vec<FieldValue>,
}
