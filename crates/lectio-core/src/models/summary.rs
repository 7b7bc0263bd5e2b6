//! Plan summary types and progress statistics.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus};

/// Summary information about a plan with day-completion statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Name of the plan
    pub name: String,
    /// First calendar date of the plan
    pub start_date: Date,
    /// Plan status
    pub status: PlanStatus,
    /// Provenance label ("remote", "local", "preset", "import")
    pub source_kind: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of reading days
    pub total_days: u32,
    /// Number of completed reading days
    pub completed_days: u32,
}

impl PlanSummary {
    /// Create a summary from a plan row and day counts.
    pub fn from_plan(plan: &Plan, total_days: u32, completed_days: u32) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
            start_date: plan.start_date,
            status: plan.status,
            source_kind: plan.source.kind().to_string(),
            created_at: plan.created_at,
            total_days,
            completed_days,
        }
    }
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_days = plan.days.len() as u32;
        let completed_days = plan.days.iter().filter(|d| d.completed).count() as u32;
        Self::from_plan(plan, total_days, completed_days)
    }
}

/// Completion statistics returned by progress updates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressStats {
    /// Total number of reading days in the plan
    pub total_days: u32,
    /// Number of completed days
    pub completed_days: u32,
    /// Number of days still to read
    pub remaining_days: u32,
    /// Rounded completion percentage in [0, 100]
    pub percent: u32,
}

impl ProgressStats {
    /// Compute statistics from raw day counts.
    pub fn new(total_days: u32, completed_days: u32) -> Self {
        let percent = if total_days > 0 {
            ((completed_days as f64 / total_days as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total_days,
            completed_days,
            remaining_days: total_days - completed_days,
            percent,
        }
    }

    /// Whether every day of the plan is completed.
    pub fn is_complete(&self) -> bool {
        self.total_days > 0 && self.completed_days >= self.total_days
    }
}
