//! Workload aggregation
//!
//! Folds a set of calendar events into per-assignee counters and ranks the
//! result lightest-first. Closed events contribute to no counter at all -
//! an issue that was overdue but has since been closed is invisible here.

use chrono::{DateTime, Utc};

use crate::types::{CalendarEvent, WorkloadEntry};

/// Aggregate events into per-assignee workload entries, ranked ascending
/// by total workload. Ties keep the order assignees were first seen in
/// (stable sort), so `rank[0]` is the recommendation for new work.
pub fn aggregate_workload(events: &[CalendarEvent], now: DateTime<Utc>) -> Vec<WorkloadEntry> {
    let today = now.date_naive();
    let mut entries: Vec<WorkloadEntry> = Vec::new();

    for event in events {
        if event.status == "closed" {
            continue;
        }

        for assignee in &event.assignees {
            let idx = match entries.iter().position(|e| e.login == assignee.login) {
                Some(idx) => idx,
                None => {
                    entries.push(WorkloadEntry {
                        login: assignee.login.clone(),
                        avatar_url: assignee.avatar_url.clone(),
                        active_issues: 0,
                        upcoming_issues: 0,
                        overdue_issues: 0,
                        total_workload: 0,
                    });
                    entries.len() - 1
                }
            };
            let entry = &mut entries[idx];

            entry.active_issues += 1;
            entry.total_workload += 1;

            if event.start_date > today {
                entry.upcoming_issues += 1;
            }
            if event.end_date.is_some_and(|end| end < today) {
                entry.overdue_issues += 1;
            }
        }
    }

    entries.sort_by_key(|e| e.total_workload);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::types::User;

    fn now() -> DateTime<Utc> {
        "2025-09-15T12:00:00Z".parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(
        id: u32,
        status: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
        assignees: &[&str],
    ) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            start_date: start,
            end_date: end,
            url: String::new(),
            labels: Vec::new(),
            assignees: assignees
                .iter()
                .map(|login| User {
                    login: login.to_string(),
                    avatar_url: String::new(),
                })
                .collect(),
            status: status.to_string(),
            project_status: None,
            event_type: "issue".to_string(),
        }
    }

    #[test]
    fn counts_active_upcoming_and_overdue() {
        // alice: 3 open events (1 upcoming, none overdue) and 1 closed one.
        let events = vec![
            event(1, "open", date(2025, 9, 10), None, &["alice"]),
            event(2, "open", date(2025, 9, 20), None, &["alice"]),
            event(3, "open", date(2025, 9, 12), Some(date(2025, 9, 18)), &["alice"]),
            event(4, "closed", date(2025, 9, 1), Some(date(2025, 9, 5)), &["alice"]),
        ];

        let entries = aggregate_workload(&events, now());
        assert_eq!(entries.len(), 1);
        let alice = &entries[0];
        assert_eq!(alice.active_issues, 3);
        assert_eq!(alice.total_workload, 3);
        assert_eq!(alice.upcoming_issues, 1);
        assert_eq!(alice.overdue_issues, 0);
    }

    #[test]
    fn overdue_needs_an_end_date_in_the_past() {
        let events = vec![
            event(1, "open", date(2025, 9, 1), Some(date(2025, 9, 10)), &["bob"]),
            event(2, "open", date(2025, 9, 1), Some(date(2025, 9, 20)), &["bob"]),
            event(3, "open", date(2025, 9, 1), None, &["bob"]),
        ];

        let entries = aggregate_workload(&events, now());
        assert_eq!(entries[0].overdue_issues, 1);
    }

    #[test]
    fn closed_events_touch_no_counter() {
        // bob only ever appears on closed events: no entry is created.
        let events = vec![
            event(1, "closed", date(2025, 9, 1), Some(date(2025, 9, 5)), &["bob"]),
            event(2, "closed", date(2025, 9, 20), None, &["bob"]),
            event(3, "open", date(2025, 9, 10), None, &["alice"]),
        ];

        let entries = aggregate_workload(&events, now());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].login, "alice");
    }

    #[test]
    fn ranking_is_ascending_and_stable() {
        let mut events = vec![
            // bob first encountered, 2 events; alice 1; carol 2.
            event(1, "open", date(2025, 9, 1), None, &["bob"]),
            event(2, "open", date(2025, 9, 1), None, &["bob", "carol"]),
            event(3, "open", date(2025, 9, 1), None, &["alice", "carol"]),
        ];
        let entries = aggregate_workload(&events, now());

        assert_eq!(entries[0].login, "alice");
        // bob and carol tie at 2: encounter order breaks the tie.
        assert_eq!(entries[1].login, "bob");
        assert_eq!(entries[2].login, "carol");
        for pair in entries.windows(2) {
            assert!(pair[0].total_workload <= pair[1].total_workload);
        }

        // One more closed event changes nothing.
        events.push(event(4, "closed", date(2025, 9, 1), None, &["alice"]));
        let again = aggregate_workload(&events, now());
        assert_eq!(again[0].login, "alice");
        assert_eq!(again[0].total_workload, 1);
    }

    #[test]
    fn lightest_assignee_ranks_first() {
        let events = vec![
            event(1, "open", date(2025, 9, 1), None, &["bob"]),
            event(2, "open", date(2025, 9, 2), None, &["bob"]),
            event(3, "open", date(2025, 9, 3), None, &["bob"]),
            event(4, "open", date(2025, 9, 4), None, &["bob"]),
            event(5, "open", date(2025, 9, 5), None, &["bob", "alice"]),
            event(6, "open", date(2025, 9, 6), None, &["alice"]),
        ];
        let entries = aggregate_workload(&events, now());
        assert_eq!(entries[0].login, "alice");
        assert_eq!(entries[0].total_workload, 2);
        assert_eq!(entries[1].login, "bob");
        assert_eq!(entries[1].total_workload, 5);
    }
}
