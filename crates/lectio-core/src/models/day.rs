//! Reading day model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A single prayer subject attached to a reading day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrayerSubject {
    /// Short theme label (e.g. "Gratitude")
    pub theme: String,
    /// The prayer prompt itself
    pub subject: String,
    /// Display color name from the fixed palette
    pub color: String,
    /// Whether the user has acknowledged this subject
    #[serde(default)]
    pub acknowledged: bool,
    /// Free-form user notes
    #[serde(default)]
    pub notes: String,
}

/// One calendar day's assigned readings and devotional content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingDay {
    /// Unique identifier for the day row
    pub id: u64,

    /// Owning plan
    pub plan_id: u64,

    /// 1-based contiguous index within the plan
    pub day_index: u32,

    /// Calendar date assigned to this day
    pub date: Date,

    /// Ordered reading references (never empty)
    pub readings: Vec<String>,

    /// Optional meditation theme
    pub meditation_theme: Option<String>,

    /// Optional prayer subjects
    pub prayer_subjects: Option<Vec<PrayerSubject>>,

    /// Optional memory verse
    pub memory_verse: Option<String>,

    /// Whether the user has completed this day
    #[serde(default)]
    pub completed: bool,

    /// When the day was completed, if it has been
    pub completed_at: Option<Timestamp>,

    /// Free-form user notes
    pub notes: Option<String>,
}
