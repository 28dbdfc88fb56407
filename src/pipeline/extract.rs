//! Calendar event extraction
//!
//! Derives one [`CalendarEvent`] per issue. Start and end dates resolve
//! independently through a strict fallback order:
//!
//! 1. Custom field values - a field whose name contains "start" supplies
//!    the start date, one containing "end" or "due" supplies the end date;
//!    the first value carrying a date wins per slot.
//! 2. Body markers - `**Start Date:**` / `**End Date:**` followed by a
//!    parenthesized `YYYY-MM-DD` date.
//! 3. The issue creation date (start) or milestone due date (end).
//!
//! The end date may stay unresolved (open-ended event). Issues whose start
//! date cannot be resolved at all produce no event.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::types::{CalendarEvent, EventLabel, FieldValue, Issue, ProjectItem};

static START_MARKER: OnceLock<Regex> = OnceLock::new();
static END_MARKER: OnceLock<Regex> = OnceLock::new();

fn start_marker() -> &'static Regex {
    START_MARKER
        .get_or_init(|| Regex::new(r"\*\*Start Date:\*\*[^()]*\(([^)]+)\)").expect("static pattern"))
}

fn end_marker() -> &'static Regex {
    END_MARKER
        .get_or_init(|| Regex::new(r"\*\*End Date:\*\*[^()]*\(([^)]+)\)").expect("static pattern"))
}

/// Extract events from a set of project items, silently dropping issues
/// without a resolvable start date.
pub fn extract_events(items: &[ProjectItem]) -> Vec<CalendarEvent> {
    items.iter().filter_map(extract_event).collect()
}

/// Extract the event for a single project item
pub fn extract_event(item: &ProjectItem) -> Option<CalendarEvent> {
    let issue = &item.issue;
    let start_date = resolve_start(issue, &item.fields)?;
    let end_date = resolve_end(issue, &item.fields);
    let project_status = resolve_status(&item.fields);

    let labels = issue
        .labels
        .iter()
        .map(|l| EventLabel {
            name: l.name.clone(),
            color: format!("#{}", l.color),
        })
        .collect();

    Some(CalendarEvent {
        id: issue.number.to_string(),
        title: issue.title.clone(),
        start_date,
        end_date,
        url: issue.url.clone(),
        labels,
        assignees: issue.assignees.clone(),
        status: issue.state.clone(),
        project_status,
        event_type: "issue".to_string(),
    })
}

fn resolve_start(issue: &Issue, fields: &[FieldValue]) -> Option<NaiveDate> {
    field_date(fields, |name| name.contains("start"))
        .or_else(|| {
            issue
                .body
                .as_deref()
                .and_then(|body| body_date(body, start_marker()))
        })
        .or_else(|| instant_date(&issue.created_at))
}

fn resolve_end(issue: &Issue, fields: &[FieldValue]) -> Option<NaiveDate> {
    field_date(fields, |name| name.contains("end") || name.contains("due"))
        .or_else(|| {
            issue
                .body
                .as_deref()
                .and_then(|body| body_date(body, end_marker()))
        })
        .or_else(|| {
            issue
                .milestone
                .as_ref()
                .and_then(|m| m.due_on.as_deref())
                .and_then(instant_date)
        })
}

/// First field value whose (lowercased) name matches and which carries a
/// date; later matches for the slot are ignored.
fn field_date(fields: &[FieldValue], matches: impl Fn(&str) -> bool) -> Option<NaiveDate> {
    fields.iter().find_map(|f| {
        if matches(&f.field_name.to_lowercase()) {
            f.date()
        } else {
            None
        }
    })
}

/// Board status column from the first select-valued field whose name
/// contains "status", "state", or "progress". Independent of the date
/// fallback chain.
fn resolve_status(fields: &[FieldValue]) -> Option<String> {
    fields.iter().find_map(|f| {
        let name = f.field_name.to_lowercase();
        if name.contains("status") || name.contains("state") || name.contains("progress") {
            f.select_name().map(str::to_string)
        } else {
            None
        }
    })
}

/// Parse the parenthesized date after a body marker
fn body_date(body: &str, marker: &Regex) -> Option<NaiveDate> {
    let captured = marker.captures(body)?.get(1)?;
    NaiveDate::parse_from_str(captured.as_str().trim(), "%Y-%m-%d").ok()
}

/// Calendar date of an ISO 8601 instant ("2025-09-01T12:00:00Z" or a bare
/// "2025-09-01"). Malformed input yields `None`.
fn instant_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}

/// Creation-date cutoff used to scope which issues are considered.
/// Issues with unparseable creation dates stay in scope; the extractor
/// decides their fate.
pub fn created_since(issue: &Issue, cutoff: NaiveDate) -> bool {
    instant_date(&issue.created_at).is_none_or(|created| created >= cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldPayload, Milestone, User};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issue(number: u32, body: Option<&str>) -> Issue {
        Issue {
            id: format!("I_{}", number),
            number,
            title: format!("Issue {}", number),
            body: body.map(str::to_string),
            state: "open".to_string(),
            created_at: "2025-08-01T09:30:00Z".to_string(),
            updated_at: "2025-08-02T09:30:00Z".to_string(),
            closed_at: None,
            url: format!("https://github.com/octo-org/repo/issues/{}", number),
            author: User {
                login: "carol".to_string(),
                avatar_url: String::new(),
            },
            labels: Vec::new(),
            assignees: Vec::new(),
            milestone: None,
        }
    }

    fn date_field(name: &str, d: NaiveDate) -> FieldValue {
        FieldValue {
            field_name: name.to_string(),
            payload: FieldPayload::Date(d),
        }
    }

    fn select_field(name: &str, value: &str) -> FieldValue {
        FieldValue {
            field_name: name.to_string(),
            payload: FieldPayload::SingleSelect(value.to_string()),
        }
    }

    fn item(issue: Issue, fields: Vec<FieldValue>) -> ProjectItem {
        ProjectItem { issue, fields }
    }

    #[test]
    fn field_date_beats_body_and_created_at() {
        let body = "**Start Date:** foo (2025-09-20)";
        let it = item(
            issue(1, Some(body)),
            vec![date_field("Start date", date(2025, 9, 1))],
        );
        let event = extract_event(&it).unwrap();
        assert_eq!(event.start_date, date(2025, 9, 1));
    }

    #[test]
    fn first_matching_field_wins() {
        let it = item(
            issue(1, None),
            vec![
                date_field("Sprint start", date(2025, 9, 3)),
                date_field("Start date", date(2025, 9, 10)),
            ],
        );
        let event = extract_event(&it).unwrap();
        assert_eq!(event.start_date, date(2025, 9, 3));
    }

    #[test]
    fn body_markers_resolve_both_slots() {
        let body = "**Start Date:** foo (2025-09-01)\n**End Date:** bar (2025-09-10)";
        let event = extract_event(&item(issue(1, Some(body)), vec![])).unwrap();
        assert_eq!(event.start_date, date(2025, 9, 1));
        assert_eq!(event.end_date, Some(date(2025, 9, 10)));
    }

    #[test]
    fn start_falls_back_to_created_at() {
        let event = extract_event(&item(issue(1, Some("no markers here")), vec![])).unwrap();
        assert_eq!(event.start_date, date(2025, 8, 1));
    }

    #[test]
    fn end_falls_back_to_milestone_due_date() {
        let mut i = issue(1, None);
        i.milestone = Some(Milestone {
            title: "v1".to_string(),
            description: None,
            due_on: Some("2025-10-15T00:00:00Z".to_string()),
        });
        let event = extract_event(&item(i, vec![])).unwrap();
        assert_eq!(event.end_date, Some(date(2025, 10, 15)));
    }

    #[test]
    fn end_stays_open_without_any_source() {
        let event = extract_event(&item(issue(1, None), vec![])).unwrap();
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn slots_resolve_independently() {
        // An end field must never leak into the start slot and vice versa.
        let it = item(
            issue(1, None),
            vec![
                date_field("Due date", date(2025, 9, 30)),
                date_field("Start date", date(2025, 9, 5)),
            ],
        );
        let event = extract_event(&it).unwrap();
        assert_eq!(event.start_date, date(2025, 9, 5));
        assert_eq!(event.end_date, Some(date(2025, 9, 30)));
    }

    #[test]
    fn malformed_body_date_is_skipped() {
        let body = "**Start Date:** kickoff (next tuesday)";
        let event = extract_event(&item(issue(1, Some(body)), vec![])).unwrap();
        // Falls through to created_at.
        assert_eq!(event.start_date, date(2025, 8, 1));
    }

    #[test]
    fn unresolvable_start_drops_the_issue() {
        let mut i = issue(1, None);
        i.created_at = "not a timestamp".to_string();
        assert!(extract_event(&item(i, vec![])).is_none());

        let events = extract_events(&[item(issue(2, None), vec![])]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn status_field_supplies_project_status() {
        let it = item(
            issue(1, None),
            vec![
                select_field("Priority", "High"),
                select_field("Status", "In Progress"),
                select_field("Progress state", "Done"),
            ],
        );
        let event = extract_event(&it).unwrap();
        assert_eq!(event.project_status.as_deref(), Some("In Progress"));
    }

    #[test]
    fn label_colors_gain_hash_prefix() {
        let mut i = issue(1, None);
        i.labels.push(crate::types::Label {
            id: "L_1".to_string(),
            name: "bug".to_string(),
            color: "d73a4a".to_string(),
            description: None,
        });
        let event = extract_event(&item(i, vec![])).unwrap();
        assert_eq!(event.labels[0].color, "#d73a4a");
    }

    #[test]
    fn since_cutoff_scopes_by_creation_date() {
        let i = issue(1, None); // created 2025-08-01
        assert!(created_since(&i, date(2025, 8, 1)));
        assert!(created_since(&i, date(2025, 7, 1)));
        assert!(!created_since(&i, date(2025, 8, 2)));

        let mut malformed = issue(2, None);
        malformed.created_at = "garbage".to_string();
        assert!(created_since(&malformed, date(2025, 8, 2)));
    }

    #[test]
    fn extraction_is_idempotent() {
        let body = "**Start Date:** foo (2025-09-01)\n**End Date:** bar (2025-09-10)";
        let items = vec![
            item(issue(1, Some(body)), vec![]),
            item(issue(2, None), vec![date_field("Start", date(2025, 9, 2))]),
        ];
        let first = extract_events(&items);
        let second = extract_events(&items);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
