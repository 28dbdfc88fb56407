//! End-to-end pipeline tests over the public API
//!
//! These exercise the full transformation - normalized issues through
//! event extraction, workload aggregation, and grid projection - without
//! touching the network.

use chrono::NaiveDate;

use team_pulse_mcp::pipeline::{aggregate_workload, extract_events, project_month};
use team_pulse_mcp::render;
use team_pulse_mcp::types::{FieldPayload, FieldValue, Issue, ProjectItem, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn issue(number: u32, state: &str, body: Option<&str>, assignees: &[&str]) -> Issue {
    Issue {
        id: format!("I_{}", number),
        number,
        title: format!("Issue {}", number),
        body: body.map(str::to_string),
        state: state.to_string(),
        created_at: "2025-09-08T10:00:00Z".to_string(),
        updated_at: "2025-09-08T10:00:00Z".to_string(),
        closed_at: None,
        url: format!("https://github.com/octo-org/repo/issues/{}", number),
        author: User {
            login: "dana".to_string(),
            avatar_url: String::new(),
        },
        labels: Vec::new(),
        assignees: assignees
            .iter()
            .map(|login| User {
                login: login.to_string(),
                avatar_url: String::new(),
            })
            .collect(),
        milestone: None,
    }
}

fn plain(issue: Issue) -> ProjectItem {
    ProjectItem {
        issue,
        fields: Vec::new(),
    }
}

#[test]
fn body_markers_flow_through_to_the_grid() {
    let body = "**Start Date:** kickoff (2025-08-30)\n**End Date:** handoff (2025-09-05)";
    let items = vec![plain(issue(41, "open", Some(body), &["alice"]))];

    let events = extract_events(&items);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start_date, date(2025, 8, 30));
    assert_eq!(events[0].end_date, Some(date(2025, 9, 5)));

    // Queried for September, the event shows on the 1st through the 5th only.
    let grid = project_month(date(2025, 9, 15), &events);
    let days: Vec<NaiveDate> = grid.keys().copied().collect();
    let expected: Vec<NaiveDate> = (1..=5).map(|d| date(2025, 9, d)).collect();
    assert_eq!(days, expected);
}

#[test]
fn field_values_take_precedence_over_everything() {
    let body = "**Start Date:** wrong (2025-01-01)";
    let items = vec![ProjectItem {
        issue: issue(42, "open", Some(body), &[]),
        fields: vec![FieldValue {
            field_name: "Start date".to_string(),
            payload: FieldPayload::Date(date(2025, 9, 22)),
        }],
    }];

    let events = extract_events(&items);
    assert_eq!(events[0].start_date, date(2025, 9, 22));
}

#[test]
fn workload_counts_and_recommendation() {
    let now = "2025-09-15T12:00:00Z".parse().unwrap();

    // bob carries 5 open events, alice 2; one closed event for alice on top.
    let mut items: Vec<ProjectItem> = (1..=5)
        .map(|n| plain(issue(n, "open", None, &["bob"])))
        .collect();
    items.push(plain(issue(6, "open", None, &["alice"])));
    items.push(plain(issue(7, "open", None, &["alice"])));
    items.push(plain(issue(8, "closed", None, &["alice"])));

    let events = extract_events(&items);
    let ranking = aggregate_workload(&events, now);

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].login, "alice");
    assert_eq!(ranking[0].total_workload, 2);
    assert_eq!(ranking[0].active_issues, ranking[0].total_workload);
    assert_eq!(ranking[1].login, "bob");
    assert_eq!(ranking[1].total_workload, 5);

    let recommendation = render::text::best_assignee(&ranking);
    assert!(recommendation.contains("alice"));
}

#[test]
fn closed_only_assignees_get_no_entry() {
    let now = "2025-09-15T12:00:00Z".parse().unwrap();
    let items = vec![
        plain(issue(1, "closed", None, &["bob"])),
        plain(issue(2, "open", None, &["alice"])),
    ];

    let events = extract_events(&items);
    let ranking = aggregate_workload(&events, now);

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].login, "alice");
}

#[test]
fn single_day_event_stays_on_its_day() {
    let mut i = issue(9, "open", None, &[]);
    i.created_at = "2025-09-15T08:00:00Z".to_string();
    let events = extract_events(&[plain(i)]);

    let grid = project_month(date(2025, 9, 1), &events);
    assert_eq!(grid.len(), 1);
    assert!(grid.contains_key(&date(2025, 9, 15)));
    assert!(!grid.contains_key(&date(2025, 9, 14)));
    assert!(!grid.contains_key(&date(2025, 9, 16)));
}

#[test]
fn rendered_views_carry_the_data() {
    let now = "2025-09-15T12:00:00Z".parse().unwrap();
    let items = vec![
        plain(issue(1, "open", None, &["alice"])),
        plain(issue(2, "open", None, &["bob"])),
    ];
    let events = extract_events(&items);
    let ranking = aggregate_workload(&events, now);

    let table = render::html::workload_table(&ranking);
    assert!(table.contains("alice"));
    assert!(table.contains("bob"));

    let grid = project_month(date(2025, 9, 1), &events);
    let calendar = render::html::month_calendar(date(2025, 9, 1), &grid);
    assert!(calendar.contains("September 2025"));
    assert!(calendar.contains("#1"));
}
