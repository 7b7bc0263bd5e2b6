//! Plan model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{PlanSource, PlanStatus, ReadingDay};

/// A named, dated sequence of reading days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Name of the plan
    pub name: String,

    /// First calendar date of the plan
    pub start_date: Date,

    /// Total number of reading days (derived from the day sequence)
    pub total_days: u32,

    /// Status of the plan (active or completed)
    #[serde(default)]
    pub status: PlanStatus,

    /// How the plan was generated (remote fetch, local generator, preset,
    /// or ICS import), including the parameters used
    pub source: PlanSource,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated reading days, ordered by day index
    #[serde(default)]
    pub days: Vec<ReadingDay>,
}
