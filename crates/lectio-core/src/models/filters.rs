//! Filter types for plan listing.

use super::PlanStatus;

/// Filter criteria for listing plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Restrict the listing to plans with this status
    pub status: Option<PlanStatus>,
}
