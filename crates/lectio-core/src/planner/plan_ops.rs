//! Plan retrieval, listing and deletion.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Plan, PlanFilter, PlanStatus, PlanSummary},
    params::{DeletePlan, Id, ListPlans},
};

impl Planner {
    /// Retrieves a plan by its ID, days included.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists plan summaries, most recent first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<PlanSummary>> {
        let db_path = self.db_path.clone();
        let filter = PlanFilter {
            status: params.completed.then_some(PlanStatus::Completed),
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(Some(&filter))
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a plan and all its associated days.
    /// This operation cannot be undone and must be explicitly confirmed.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Deletion is permanent and requires confirmation"));
        }

        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
