//! Display formatting for domain models and collections.
//!
//! Domain models implement `Display` directly, producing markdown suitable
//! for rich terminal rendering. Collections get newtype wrappers so empty
//! collections format gracefully without callers special-casing them.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, Days)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{Days, PlanSummaries};
pub use datetime::LocalDateTime;
