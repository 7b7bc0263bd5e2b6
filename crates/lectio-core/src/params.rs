//! Parameter structures for planner operations.
//!
//! These structures are shared across interfaces (CLI today, other front
//! ends tomorrow) without framework-specific derives. Interface layers wrap
//! them with their own derive-heavy argument types and convert via `From`
//! impls, keeping clap concerns out of the core crate.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    error::{PlannerError, Result},
    models::PresetProfile,
};

/// Reading order accepted by both the local generator and the upstream site.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingOrder {
    /// Canonical book order
    #[default]
    Traditional,
    /// Deterministic progression through the selected books
    Chronological,
    /// Theme-driven selection
    Thematic,
    /// Historical ordering
    Historical,
}

impl ReadingOrder {
    /// Query-parameter representation used by the upstream generator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingOrder::Traditional => "traditional",
            ReadingOrder::Chronological => "chronological",
            ReadingOrder::Thematic => "thematic",
            ReadingOrder::Historical => "historical",
        }
    }
}

impl FromStr for ReadingOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traditional" => Ok(ReadingOrder::Traditional),
            "chronological" => Ok(ReadingOrder::Chronological),
            "thematic" => Ok(ReadingOrder::Thematic),
            "historical" => Ok(ReadingOrder::Historical),
            _ => Err(format!("Invalid reading order: {s}")),
        }
    }
}

/// Parameters driving the local plan generator.
///
/// Stored verbatim in the plan's source column so a plan remembers how it
/// was generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalPlanParameters {
    /// Number of reading days, in [1, 365]
    pub total_days: u32,
    /// Reading order mode
    #[serde(default)]
    pub order: ReadingOrder,
    /// Book-group tags or explicit book names (e.g. "NT", "Psalms",
    /// "Genèse")
    pub books: Vec<String>,
    /// Append a daily psalm reference
    #[serde(default)]
    pub include_psalms: bool,
    /// Append a daily proverb reference
    #[serde(default)]
    pub include_proverbs: bool,
}

impl LocalPlanParameters {
    /// Validate bounds and book selection before generation.
    pub fn validate(&self) -> Result<()> {
        validate_total_days(self.total_days)?;
        if catalog::expand_book_groups(&self.books).is_empty() {
            return Err(PlannerError::invalid_input("books")
                .with_reason("Book selection matches no catalog entry"));
        }
        Ok(())
    }
}

/// Parameters forwarded to the upstream plan-generator site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemotePlanParameters {
    /// Number of reading days requested, in [1, 365]
    pub total_days: u32,
    /// Reading order mode
    #[serde(default)]
    pub order: ReadingOrder,
    /// Book-group tags or explicit book names; mapped to the upstream
    /// "OT"/"NT"/"OT,NT" encoding
    pub books: Vec<String>,
    /// Weekday mask (1 = Monday .. 7 = Sunday) forwarded upstream
    pub days_of_week: Vec<u8>,
    /// Allow Old/New Testament overlap upstream
    #[serde(default)]
    pub overlap_ot_nt: bool,
    /// Reverse reading order upstream
    #[serde(default)]
    pub reverse: bool,
    /// Request reading statistics upstream
    #[serde(default)]
    pub stats: bool,
    /// Request a daily psalm upstream
    #[serde(default)]
    pub daily_psalm: bool,
    /// Request a daily proverb upstream
    #[serde(default)]
    pub daily_proverb: bool,
}

impl RemotePlanParameters {
    /// Validate bounds before any network call.
    pub fn validate(&self) -> Result<()> {
        validate_total_days(self.total_days)?;
        for day in &self.days_of_week {
            if !(1..=7).contains(day) {
                return Err(PlannerError::invalid_input("days_of_week")
                    .with_reason(format!("Weekday {day} is outside 1..=7")));
            }
        }
        Ok(())
    }
}

fn validate_total_days(total_days: u32) -> Result<()> {
    if !(1..=365).contains(&total_days) {
        return Err(PlannerError::invalid_input("total_days")
            .with_reason(format!("{total_days} is outside the allowed range 1..=365")));
    }
    Ok(())
}

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for creating a plan from the upstream generator site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRemotePlan {
    /// Name of the plan (required)
    pub name: String,
    /// First calendar date of the plan
    pub start_date: Date,
    /// Generation parameters forwarded upstream
    pub parameters: RemotePlanParameters,
}

/// Parameters for creating a plan with the local generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocalPlan {
    /// Name of the plan (required)
    pub name: String,
    /// First calendar date of the plan
    pub start_date: Date,
    /// Local generation parameters
    pub parameters: LocalPlanParameters,
}

/// Parameters for creating a plan from a named preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePresetPlan {
    /// Preset identifier (e.g. "thompson-prayer-life"); unknown slugs fall
    /// back to the default preset
    pub slug: String,
    /// First calendar date of the plan
    pub start_date: Date,
    /// User profile driving duration and daily volume
    pub profile: PresetProfile,
}

/// Parameters for importing a plan from an ICS document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportIcsPlan {
    /// Name of the plan (required)
    pub name: String,
    /// URL of the ICS document to fetch
    pub url: String,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Restrict the listing to completed plans
    #[serde(default)]
    pub completed: bool,
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Deletion is destructive and must be explicitly confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for fetching a range of reading days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRange {
    /// Owning plan ID
    pub plan_id: u64,
    /// Inclusive lower bound on day index
    pub from: Option<u32>,
    /// Inclusive upper bound on day index
    pub to: Option<u32>,
}

/// Parameters for updating the completion state of a reading day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgress {
    /// Owning plan ID
    pub plan_id: u64,
    /// 1-based day index within the plan
    pub day_index: u32,
    /// New completion state
    pub completed: bool,
    /// Optional notes to store alongside the day
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_parameters_validate() {
        let params = LocalPlanParameters {
            total_days: 30,
            order: ReadingOrder::Chronological,
            books: vec!["NT".to_string()],
            include_psalms: false,
            include_proverbs: false,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_total_days_out_of_range() {
        let mut params = LocalPlanParameters {
            total_days: 0,
            order: ReadingOrder::Traditional,
            books: vec!["OT".to_string()],
            include_psalms: false,
            include_proverbs: false,
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "total_days"
        ));

        params.total_days = 366;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_empty_book_expansion_rejected() {
        let params = LocalPlanParameters {
            total_days: 7,
            order: ReadingOrder::Traditional,
            books: vec!["Inconnu".to_string()],
            include_psalms: false,
            include_proverbs: false,
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "books"
        ));
    }

    #[test]
    fn test_remote_parameters_weekday_bounds() {
        let params = RemotePlanParameters {
            total_days: 30,
            order: ReadingOrder::Traditional,
            books: vec![],
            days_of_week: vec![1, 8],
            overlap_ot_nt: false,
            reverse: false,
            stats: false,
            daily_psalm: false,
            daily_proverb: false,
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "days_of_week"
        ));
    }

    #[test]
    fn test_reading_order_round_trip() {
        assert_eq!(
            "chronological".parse::<ReadingOrder>(),
            Ok(ReadingOrder::Chronological)
        );
        assert_eq!(ReadingOrder::Historical.as_str(), "historical");
        assert!("random".parse::<ReadingOrder>().is_err());
    }
}
