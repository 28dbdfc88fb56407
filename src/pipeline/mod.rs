//! The data-transformation core
//!
//! Pure functions from normalized issues to calendar events, workload
//! entries, and month grids. Nothing in here performs I/O; handlers feed
//! fetched records in and pass `Utc::now()` for the reference instant.

pub mod calendar;
pub mod extract;
pub mod workload;

pub use calendar::{month_bounds, project_month, DayGrid};
pub use extract::{created_since, extract_event, extract_events};
pub use workload::aggregate_workload;
