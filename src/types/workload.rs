//! Per-assignee workload model

use serde::{Deserialize, Serialize};

/// Workload counters for one assignee
///
/// Built fresh per request from the current event set. Closed events never
/// reach any counter here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadEntry {
    /// GitHub login
    pub login: String,

    /// Avatar image URL (may be empty)
    #[serde(default)]
    pub avatar_url: String,

    /// Non-closed events assigned to this person
    pub active_issues: u32,

    /// Assigned events whose start date is in the future
    pub upcoming_issues: u32,

    /// Assigned events whose end date is in the past
    pub overdue_issues: u32,

    /// Same counter as `active_issues` under the name the ranking sorts by.
    /// Closed events are filtered before counting, so the two never diverge.
    pub total_workload: u32,
}

/// A workload entry plus the person's historical completed-issue count
///
/// The completed count comes from an independent per-person lookup; when
/// that lookup fails it is reported as zero rather than failing the whole
/// status aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatus {
    #[serde(flatten)]
    pub entry: WorkloadEntry,
    pub completed_issues: u64,
}

/// Presentation bucket for a workload total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadBand {
    Light,
    Moderate,
    Heavy,
    Overloaded,
}

impl WorkloadBand {
    /// Bucket a total workload: light up to 2, moderate up to 4,
    /// heavy up to 6, overloaded beyond.
    pub fn for_total(total: u32) -> Self {
        match total {
            0..=2 => Self::Light,
            3..=4 => Self::Moderate,
            5..=6 => Self::Heavy,
            _ => Self::Overloaded,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Overloaded => "overloaded",
        }
    }

    /// Display color for HTML views
    pub fn color(&self) -> &'static str {
        match self {
            Self::Light => "#22c55e",
            Self::Moderate => "#eab308",
            Self::Heavy => "#f97316",
            Self::Overloaded => "#ef4444",
        }
    }
}
