//! Canonical data model shared across the pipeline
//!
//! Organized by entity: issue (with normalizing constructors), custom field
//! values, calendar events, and workload entries.

pub mod event;
pub mod field;
pub mod issue;
pub mod workload;

pub use event::{CalendarEvent, EventLabel};
pub use field::{FieldPayload, FieldValue};
pub use issue::{Issue, Label, Milestone, ProjectItem, User};
pub use workload::{MemberStatus, WorkloadBand, WorkloadEntry};
