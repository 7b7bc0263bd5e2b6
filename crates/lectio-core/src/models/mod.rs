//! Data models for reading plans and their days.
//!
//! This module contains the core domain models of the reading-plan system.
//! Display implementations for these models are located in
//! [`crate::display::models`] to maintain a clean separation between data
//! structures and presentation logic.

pub mod day;
pub mod filters;
pub mod plan;
pub mod source;
pub mod status;
pub mod summary;

// Re-export all public types at the models level
pub use day::{PrayerSubject, ReadingDay};
pub use filters::PlanFilter;
pub use plan::Plan;
pub use source::{PlanSource, PresetProfile};
pub use status::PlanStatus;
pub use summary::{PlanSummary, ProgressStats};
