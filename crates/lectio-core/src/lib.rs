//! Core library for the Lectio Bible reading plan application.
//!
//! This crate provides the business logic for creating and following reading
//! plans: a catalog of the canonical French Bible books, a fully offline plan
//! generator, a preset-based generator, a scraper for a third-party plan
//! generator site, an ICS calendar importer, and SQLite persistence with
//! progress tracking.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::Date;
//! use lectio_core::{
//!     params::{CreateLocalPlan, LocalPlanParameters},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("lectio.db"))
//!     .build()
//!     .await?;
//!
//! // Generate a fully local 30-day plan over the Gospels
//! let params = CreateLocalPlan {
//!     name: "Évangiles".to_string(),
//!     start_date: Date::constant(2026, 3, 1),
//!     parameters: LocalPlanParameters {
//!         total_days: 30,
//!         order: Default::default(),
//!         books: vec!["Gospels".to_string()],
//!         include_psalms: true,
//!         include_proverbs: false,
//!     },
//! };
//!
//! let plan = planner.create_local_plan(&params).await?;
//! println!("Created plan: {}", plan);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod generator;
pub mod ics;
pub mod models;
pub mod params;
pub mod planner;
pub mod presets;

// Re-export commonly used types
pub use db::Database;
pub use display::{Days, LocalDateTime, PlanSummaries};
pub use error::{PlannerError, Result};
pub use models::{
    Plan, PlanFilter, PlanSource, PlanStatus, PlanSummary, PresetProfile, ProgressStats, ReadingDay,
};
pub use params::{
    CreateLocalPlan, CreatePresetPlan, CreateRemotePlan, DayRange, DeletePlan, Id, ImportIcsPlan,
    ListPlans, UpdateProgress,
};
pub use planner::{Planner, PlannerBuilder};
