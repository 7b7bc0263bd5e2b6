//! Day retrieval and progress updates.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{ProgressStats, ReadingDay},
    params::{DayRange, UpdateProgress},
};

impl Planner {
    /// Retrieves the days of a plan, optionally restricted to an inclusive
    /// index range.
    pub async fn get_days(&self, params: &DayRange) -> Result<Vec<ReadingDay>> {
        let db_path = self.db_path.clone();
        let DayRange { plan_id, from, to } = *params;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_days(plan_id, from, to)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates the completion state of a single day and returns the updated
    /// day together with the plan's fresh progress statistics. Completing
    /// the last open day marks the whole plan completed.
    pub async fn update_progress(
        &self,
        params: &UpdateProgress,
    ) -> Result<(ReadingDay, ProgressStats)> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_index = params.day_index;
        let completed = params.completed;
        let notes = params.notes.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_progress(plan_id, day_index, completed, notes.as_deref())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
