//! Calendar grid projection
//!
//! Buckets events onto the days of one month. Multi-day events are clipped
//! to the month's bounds and placed on every day of the clipped range;
//! single-day events (including those whose end date equals their start
//! date) appear only on their start date.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

use crate::types::CalendarEvent;

/// Day-to-events mapping for one month. Events keep insertion order per
/// day; keys iterate in date order.
pub type DayGrid = BTreeMap<NaiveDate, Vec<CalendarEvent>>;

/// Inclusive first and last day of the month containing `reference`
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month_start = reference.with_day(1).unwrap_or(reference);
    let month_end = month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(month_start);
    (month_start, month_end)
}

/// Project events onto the days of the month containing `reference`.
/// Events that do not overlap the month are left out entirely.
pub fn project_month(reference: NaiveDate, events: &[CalendarEvent]) -> DayGrid {
    let (month_start, month_end) = month_bounds(reference);
    let mut grid = DayGrid::new();

    for event in events {
        match event.end_date {
            Some(end) if end != event.start_date => {
                let from = event.start_date.max(month_start);
                let to = end.min(month_end);
                let mut day = from;
                while day <= to {
                    grid.entry(day).or_default().push(event.clone());
                    day = match day.succ_opt() {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
            _ => {
                let day = event.start_date;
                if day >= month_start && day <= month_end {
                    grid.entry(day).or_default().push(event.clone());
                }
            }
        }
    }

    grid
}
