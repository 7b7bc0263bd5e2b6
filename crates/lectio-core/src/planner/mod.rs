//! High-level planner API for managing reading plans.
//!
//! This module provides the main [`Planner`] interface for the Lectio
//! reading plan system. The planner coordinates the generators, the upstream
//! fetcher and the database, implementing all business logic for plan and
//! day operations.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`create`]: Plan creation from every source (remote, local, preset, ICS)
//! - [`plan_ops`]: Plan retrieval, listing and deletion
//! - [`day_ops`]: Day retrieval and progress updates
//!
//! # Usage
//!
//! ```rust
//! use lectio_core::{PlannerBuilder, params::ListPlans};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with default database path
//! let planner = PlannerBuilder::new().build().await?;
//!
//! // Or specify a custom database path
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/custom/path/lectio.db"))
//!     .build()
//!     .await?;
//!
//! let plans = planner.list_plans(&ListPlans::default()).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod create;
pub mod day_ops;
pub mod plan_ops;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing reading plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator_url: String,
}

impl Planner {
    /// Creates a new planner with the specified database path and upstream
    /// generator URL.
    pub(crate) fn new(db_path: PathBuf, generator_url: String) -> Self {
        Self {
            db_path,
            generator_url,
        }
    }
}
