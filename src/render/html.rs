//! Embeddable HTML views
//!
//! Self-contained fragments with inline styles, returned as the second
//! content block of view-producing tools. No external assets, so a host
//! can drop them straight into a panel or iframe.

use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

use crate::pipeline::{month_bounds, DayGrid};
use crate::types::{CalendarEvent, MemberStatus, WorkloadBand, WorkloadEntry};

const ACCENT: &str = "#3b82f6";

/// Minimal HTML entity escaping for text interpolated into markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn event_chip(event: &CalendarEvent) -> String {
    let color = event
        .labels
        .first()
        .map(|l| l.color.as_str())
        .unwrap_or(ACCENT);
    format!(
        "<a href=\"{}\" title=\"{}\" style=\"display:block;margin:2px 0;padding:1px 4px;\
         border-left:3px solid {};background:#f3f4f6;border-radius:2px;font-size:11px;\
         color:#111827;text-decoration:none;overflow:hidden;white-space:nowrap;\
         text-overflow:ellipsis\">#{} {}</a>",
        escape(&event.url),
        escape(&event.title),
        color,
        event.id,
        escape(&event.title),
    )
}

fn band_badge(total: u32) -> String {
    let band = WorkloadBand::for_total(total);
    format!(
        "<span style=\"background:{};color:#fff;border-radius:9px;padding:1px 8px;\
         font-size:11px\">{}</span>",
        band.color(),
        band.label(),
    )
}

/// Team dashboard: one card per member with counters and completed history
pub fn team_dashboard(members: &[MemberStatus]) -> String {
    let mut cards = String::new();
    for member in members {
        let entry = &member.entry;
        let _ = write!(
            cards,
            "<div style=\"border:1px solid #e5e7eb;border-radius:6px;padding:10px 14px;\
             min-width:180px\">\
             <div style=\"font-weight:600;margin-bottom:4px\">{} {}</div>\
             <div style=\"font-size:12px;color:#374151\">\
             {} active &middot; {} upcoming &middot; {} overdue<br>{} completed all-time\
             </div></div>",
            escape(&entry.login),
            band_badge(entry.total_workload),
            entry.active_issues,
            entry.upcoming_issues,
            entry.overdue_issues,
            member.completed_issues,
        );
    }

    format!(
        "<div style=\"font-family:system-ui,sans-serif\">\
         <h3 style=\"margin:0 0 8px\">Team status</h3>\
         <div style=\"display:flex;flex-wrap:wrap;gap:8px\">{}</div></div>",
        cards
    )
}

/// Workload ranking table, lightest first
pub fn workload_table(entries: &[WorkloadEntry]) -> String {
    let mut rows = String::new();
    for (rank, entry) in entries.iter().enumerate() {
        let _ = write!(
            rows,
            "<tr><td style=\"padding:4px 10px\">{}</td>\
             <td style=\"padding:4px 10px\">{}</td>\
             <td style=\"padding:4px 10px;text-align:center\">{}</td>\
             <td style=\"padding:4px 10px;text-align:center\">{}</td>\
             <td style=\"padding:4px 10px;text-align:center\">{}</td>\
             <td style=\"padding:4px 10px\">{}</td></tr>",
            rank + 1,
            escape(&entry.login),
            entry.total_workload,
            entry.upcoming_issues,
            entry.overdue_issues,
            band_badge(entry.total_workload),
        );
    }

    format!(
        "<table style=\"font-family:system-ui,sans-serif;font-size:13px;\
         border-collapse:collapse;border:1px solid #e5e7eb\">\
         <thead><tr style=\"background:#f9fafb;text-align:left\">\
         <th style=\"padding:4px 10px\">#</th><th style=\"padding:4px 10px\">Assignee</th>\
         <th style=\"padding:4px 10px\">Open</th><th style=\"padding:4px 10px\">Upcoming</th>\
         <th style=\"padding:4px 10px\">Overdue</th><th style=\"padding:4px 10px\">Load</th>\
         </tr></thead><tbody>{}</tbody></table>",
        rows
    )
}

/// Per-person schedule list for the coming days
pub fn schedule_list(login: &str, events: &[CalendarEvent]) -> String {
    let mut items = String::new();
    for event in events {
        let span = match event.end_date {
            Some(end) if end != event.start_date => format!("{} &ndash; {}", event.start_date, end),
            _ => event.start_date.to_string(),
        };
        let _ = write!(
            items,
            "<li style=\"margin:4px 0\">{}<span style=\"color:#6b7280;font-size:12px\">\
             &nbsp;{}</span></li>",
            event_chip(event),
            span,
        );
    }

    format!(
        "<div style=\"font-family:system-ui,sans-serif\">\
         <h3 style=\"margin:0 0 8px\">Schedule: {}</h3>\
         <ul style=\"list-style:none;margin:0;padding:0\">{}</ul></div>",
        escape(login),
        items
    )
}

/// Month calendar grid with events bucketed onto their days
pub fn month_calendar(reference: NaiveDate, grid: &DayGrid) -> String {
    let (month_start, month_end) = month_bounds(reference);
    let offset = month_start.weekday().num_days_from_sunday();

    let mut cells = String::new();
    let mut column = 0u32;

    for _ in 0..offset {
        cells.push_str("<td style=\"border:1px solid #e5e7eb\"></td>");
        column += 1;
    }

    let mut day = month_start;
    while day <= month_end {
        if column == 7 {
            cells.push_str("</tr><tr>");
            column = 0;
        }

        let mut chips = String::new();
        if let Some(events) = grid.get(&day) {
            for event in events {
                chips.push_str(&event_chip(event));
            }
        }
        let _ = write!(
            cells,
            "<td style=\"border:1px solid #e5e7eb;vertical-align:top;width:110px;\
             height:70px;padding:2px 4px\">\
             <div style=\"font-size:11px;color:#6b7280\">{}</div>{}</td>",
            day.day(),
            chips,
        );

        column += 1;
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    while column < 7 {
        cells.push_str("<td style=\"border:1px solid #e5e7eb\"></td>");
        column += 1;
    }

    let weekdays = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|d| format!("<th style=\"padding:4px;font-size:12px\">{}</th>", d))
        .collect::<String>();

    format!(
        "<div style=\"font-family:system-ui,sans-serif\">\
         <h3 style=\"margin:0 0 8px\">{}</h3>\
         <table style=\"border-collapse:collapse;font-size:12px\">\
         <thead><tr style=\"background:#f9fafb\">{}</tr></thead>\
         <tbody><tr>{}</tr></tbody></table></div>",
        month_start.format("%B %Y"),
        weekdays,
        cells
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_titles() {
        assert_eq!(escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn month_calendar_renders_every_day() {
        let reference = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
        let html = month_calendar(reference, &DayGrid::new());
        assert!(html.contains("September 2025"));
        // 30 day cells plus padding cells on each side.
        assert_eq!(html.matches("<td").count() % 7, 0);
    }
}
