//! Plan CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::GeneratedDay,
    models::{Plan, PlanFilter, PlanSource, PlanStatus, PlanSummary},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, start_date, status, source, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_DAY_SQL: &str = "INSERT INTO plan_days (plan_id, day_index, date, readings, meditation_theme, prayer_subjects, memory_verse, completed, completed_at, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, NULL, ?8)";
const SELECT_PLAN_SQL: &str = "SELECT id, name, start_date, status, source, created_at, updated_at FROM plans WHERE id = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const DELETE_PLAN_DAYS_SQL: &str = "DELETE FROM plan_days WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

// Base query for plan listing
const PLAN_SUMMARY_COLUMNS: &str =
    "id, name, start_date, status, source, created_at, updated_at, total_days, completed_days";
const PLAN_PROGRESS_VIEW: &str = "plan_progress";

impl super::Database {
    /// Creates a plan together with its full day sequence in one
    /// transaction. Either everything is persisted or nothing is.
    pub fn create_plan_with_days(
        &mut self,
        name: &str,
        start_date: Date,
        source: &PlanSource,
        days: &[GeneratedDay],
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let source_json = serde_json::to_string(source)?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                name,
                start_date.to_string(),
                PlanStatus::Active.as_str(),
                &source_json,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let plan_id = tx.last_insert_rowid() as u64;

        let mut stored_days = Vec::with_capacity(days.len());
        for day in days {
            let readings_json = serde_json::to_string(&day.readings)?;
            let subjects_json = day
                .prayer_subjects
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;

            tx.execute(
                INSERT_DAY_SQL,
                params![
                    plan_id as i64,
                    day.day_index as i64,
                    day.date.to_string(),
                    &readings_json,
                    day.meditation_theme.as_deref(),
                    subjects_json.as_deref(),
                    day.memory_verse.as_deref(),
                    day.notes.as_deref()
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to insert plan day", e))?;

            stored_days.push(crate::models::ReadingDay {
                id: tx.last_insert_rowid() as u64,
                plan_id,
                day_index: day.day_index,
                date: day.date,
                readings: day.readings.clone(),
                meditation_theme: day.meditation_theme.clone(),
                prayer_subjects: day.prayer_subjects.clone(),
                memory_verse: day.memory_verse.clone(),
                completed: false,
                completed_at: None,
                notes: day.notes.clone(),
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id: plan_id,
            name: name.into(),
            start_date,
            total_days: stored_days.len() as u32,
            status: PlanStatus::Active,
            source: source.clone(),
            created_at: now,
            updated_at: now,
            days: stored_days,
        })
    }

    /// Retrieves a plan by its ID, with days loaded eagerly.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        // Eagerly load days if plan exists
        if let Some(ref mut plan) = plan {
            plan.days = self.get_days(plan.id, None, None)?;
            plan.total_days = plan.days.len() as u32;
        }

        Ok(plan)
    }

    /// Lists plan summaries with optional filtering, most recent first.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<PlanSummary>> {
        let mut query = format!("SELECT {PLAN_SUMMARY_COLUMNS} FROM {PLAN_PROGRESS_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries: Vec<PlanSummary> = stmt
            .query_map(&params_refs[..], |row| {
                let status = parse_status(row, 3)?;
                let source = parse_source(row, 4)?;

                Ok(PlanSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    start_date: parse_date(row, 2)?,
                    status,
                    source_kind: source.kind().to_string(),
                    created_at: parse_timestamp(row, 5)?,
                    total_days: row.get::<_, i64>(7)? as u32,
                    completed_days: row.get::<_, i64>(8)? as u32,
                })
            })
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(summaries)
    }

    /// Permanently deletes a plan and all its associated days from the
    /// database. This operation cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Check if plan exists
        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        // Delete days explicitly before the plan row; the cascade would also
        // cover this but only with foreign keys enabled on the connection.
        tx.execute(DELETE_PLAN_DAYS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan days", e))?;

        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Helper function to construct a Plan from a database row, without days.
    pub(super) fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        let status = parse_status(row, 3)?;
        let source = parse_source(row, 4)?;

        Ok(Plan {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            start_date: parse_date(row, 2)?,
            total_days: 0,
            status,
            source,
            created_at: parse_timestamp(row, 5)?,
            updated_at: parse_timestamp(row, 6)?,
            days: Vec::new(),
        })
    }
}

pub(super) fn parse_status(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<PlanStatus> {
    let status_str: String = row.get(idx)?;
    status_str.parse::<PlanStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid plan status: {status_str}").into(),
        )
    })
}

pub(super) fn parse_source(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<PlanSource> {
    let source_str: String = row.get(idx)?;
    serde_json::from_str(&source_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(super) fn parse_date(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(super) fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
