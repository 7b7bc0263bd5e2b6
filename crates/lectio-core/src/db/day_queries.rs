//! Reading day queries and progress updates.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{PlanStatus, PrayerSubject, ProgressStats, ReadingDay},
};

// Optimized SQL queries as const strings for compile-time optimization
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const DAY_COLUMNS: &str = "id, plan_id, day_index, date, readings, meditation_theme, prayer_subjects, memory_verse, completed, completed_at, notes";
const UPDATE_DAY_PROGRESS_SQL: &str = "UPDATE plan_days SET completed = ?1, completed_at = ?2, notes = COALESCE(?3, notes) WHERE plan_id = ?4 AND day_index = ?5";
const COUNT_DAYS_SQL: &str =
    "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM plan_days WHERE plan_id = ?1";
const MARK_PLAN_COMPLETED_SQL: &str =
    "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4";
const TOUCH_PLAN_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a ReadingDay from a database row
    fn build_day_from_row(row: &rusqlite::Row) -> rusqlite::Result<ReadingDay> {
        let readings_str: String = row.get(4)?;
        let readings: Vec<String> = serde_json::from_str(&readings_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        let subjects_str: Option<String> = row.get(6)?;
        let prayer_subjects: Option<Vec<PrayerSubject>> = subjects_str
            .map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

        let completed_at: Option<Timestamp> = row
            .get::<_, Option<String>>(9)?
            .map(|s| s.parse::<Timestamp>())
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;

        Ok(ReadingDay {
            id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            day_index: row.get::<_, i64>(2)? as u32,
            date: super::plan_queries::parse_date(row, 3)?,
            readings,
            meditation_theme: row.get(5)?,
            prayer_subjects,
            memory_verse: row.get(7)?,
            completed: row.get::<_, i64>(8)? != 0,
            completed_at,
            notes: row.get(10)?,
        })
    }

    /// Retrieves the days of a plan ordered by index, optionally restricted
    /// to an inclusive index range.
    pub fn get_days(
        &self,
        plan_id: u64,
        from: Option<u32>,
        to: Option<u32>,
    ) -> Result<Vec<ReadingDay>> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        let mut query = format!("SELECT {DAY_COLUMNS} FROM plan_days WHERE plan_id = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(plan_id as i64)];

        if let Some(from) = from {
            query.push_str(" AND day_index >= ?");
            params_vec.push(Box::new(from as i64));
        }
        if let Some(to) = to {
            query.push_str(" AND day_index <= ?");
            params_vec.push(Box::new(to as i64));
        }

        query.push_str(" ORDER BY day_index");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let days = stmt
            .query_map(&params_refs[..], Self::build_day_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query plan days", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plan days", e))?;

        Ok(days)
    }

    /// Updates the completion state of a single day and recomputes plan
    /// progress. Completing the last open day flips the plan to completed;
    /// un-completing a day never flips it back.
    pub fn update_progress(
        &mut self,
        plan_id: u64,
        day_index: u32,
        completed: bool,
        notes: Option<&str>,
    ) -> Result<(ReadingDay, ProgressStats)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let completed_at = completed.then(|| now.clone());

        let rows_affected = tx
            .execute(
                UPDATE_DAY_PROGRESS_SQL,
                params![
                    completed as i64,
                    completed_at.as_deref(),
                    notes,
                    plan_id as i64,
                    day_index as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to update day progress", e))?;

        if rows_affected == 0 {
            let exists: bool = tx
                .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                    row.get(0)
                })
                .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

            if !exists {
                return Err(PlannerError::PlanNotFound { id: plan_id });
            }
            return Err(PlannerError::DayNotFound { plan_id, day_index });
        }

        let (total_days, completed_days): (i64, i64) = tx
            .query_row(COUNT_DAYS_SQL, params![plan_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| PlannerError::database_error("Failed to count plan days", e))?;

        if total_days > 0 && completed_days >= total_days {
            tx.execute(
                MARK_PLAN_COMPLETED_SQL,
                params![
                    PlanStatus::Completed.as_str(),
                    &now,
                    plan_id as i64,
                    PlanStatus::Active.as_str()
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to mark plan completed", e))?;
        }

        tx.execute(TOUCH_PLAN_SQL, params![&now, plan_id as i64])
            .map_err(|e| PlannerError::database_error("Failed to touch plan", e))?;

        let day = tx
            .query_row(
                &format!("SELECT {DAY_COLUMNS} FROM plan_days WHERE plan_id = ?1 AND day_index = ?2"),
                params![plan_id as i64, day_index as i64],
                Self::build_day_from_row,
            )
            .map_err(|e| PlannerError::database_error("Failed to query updated day", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((day, ProgressStats::new(total_days as u32, completed_days as u32)))
    }
}
