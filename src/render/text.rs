//! Plain-text summaries returned as the first content block of each tool

use chrono::NaiveDate;
use std::fmt::Write;

use crate::types::{CalendarEvent, MemberStatus, WorkloadBand, WorkloadEntry};

/// Summary line for one event: id, title, span, state
fn event_line(event: &CalendarEvent) -> String {
    let span = match event.end_date {
        Some(end) if end != event.start_date => format!("{} to {}", event.start_date, end),
        _ => event.start_date.to_string(),
    };
    let status = match &event.project_status {
        Some(project_status) => format!("{}, {}", event.status, project_status),
        None => event.status.clone(),
    };
    format!("- #{} {}: {} [{}]", event.id, event.title, span, status)
}

pub fn team_status(members: &[MemberStatus], event_count: usize) -> String {
    let mut out = format!(
        "Team status: {} events, {} members with open work\n",
        event_count,
        members.len()
    );

    for member in members {
        let entry = &member.entry;
        let band = WorkloadBand::for_total(entry.total_workload);
        let _ = writeln!(
            out,
            "- {}: {} active ({} upcoming, {} overdue), {} completed all-time [{}]",
            entry.login,
            entry.active_issues,
            entry.upcoming_issues,
            entry.overdue_issues,
            member.completed_issues,
            band.label(),
        );
    }

    if members.is_empty() {
        out.push_str("No assignees carry open events right now.\n");
    }
    out
}

pub fn person_schedule(login: &str, days: u32, events: &[CalendarEvent]) -> String {
    let mut out = format!(
        "Schedule for {} over the next {} days: {} events\n",
        login,
        days,
        events.len()
    );
    for event in events {
        let _ = writeln!(out, "{}", event_line(event));
    }
    if events.is_empty() {
        let _ = writeln!(out, "Nothing scheduled for {} in this window.", login);
    }
    out
}

pub fn workload_analysis(entries: &[WorkloadEntry]) -> String {
    if entries.is_empty() {
        return "No assignees carry open events right now.".to_string();
    }

    let mut out = format!("Workload ranking ({} assignees, lightest first):\n", entries.len());
    for (rank, entry) in entries.iter().enumerate() {
        let band = WorkloadBand::for_total(entry.total_workload);
        let _ = writeln!(
            out,
            "{}. {} - {} total [{}]: {} upcoming, {} overdue",
            rank + 1,
            entry.login,
            entry.total_workload,
            band.label(),
            entry.upcoming_issues,
            entry.overdue_issues,
        );
    }
    out
}

pub fn best_assignee(entries: &[WorkloadEntry]) -> String {
    match entries.first() {
        Some(best) => format!(
            "Recommended assignee: {} (lightest workload: {} open, {} upcoming, {} overdue)",
            best.login, best.total_workload, best.upcoming_issues, best.overdue_issues
        ),
        None => "No candidates: nobody is assigned to any open event.".to_string(),
    }
}

pub fn calendar_summary(events: &[CalendarEvent], since: NaiveDate) -> String {
    let mut out = format!("{} calendar events since {}\n", events.len(), since);
    for event in events {
        let _ = writeln!(out, "{}", event_line(event));
    }
    out
}
