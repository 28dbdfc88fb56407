//! Calendar event model
//!
//! Events are derived from issues per request and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::issue::User;

/// A label as displayed on an event: name plus a ready-to-use CSS color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLabel {
    /// Label name
    pub name: String,

    /// Display color with leading `#`
    pub color: String,
}

/// A calendar event derived from one issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Issue number as text
    pub id: String,

    /// Issue title
    pub title: String,

    /// Start of the event. Always resolved; issues without a resolvable
    /// start date are dropped before an event is built.
    pub start_date: NaiveDate,

    /// End of the event; `None` means open-ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Issue URL on GitHub
    pub url: String,

    /// Display labels
    pub labels: Vec<EventLabel>,

    /// Assigned users
    pub assignees: Vec<User>,

    /// Issue state (open, closed)
    pub status: String,

    /// Board status column, when the project carries a status field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,

    /// Event kind; always "issue"
    #[serde(rename = "type")]
    pub event_type: String,
}

impl CalendarEvent {
    /// Whether the event is assigned to the given login
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignees.iter().any(|a| a.login == login)
    }

    /// Inclusive last day of the event; a missing end date makes it the
    /// single day it starts on.
    pub fn effective_end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}
