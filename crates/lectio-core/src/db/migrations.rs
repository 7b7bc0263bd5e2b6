//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if notes column exists in plan_days table
        let has_notes_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plan_days') WHERE name = 'notes'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add notes column if it doesn't exist
        if !has_notes_column {
            self.connection
                .execute("ALTER TABLE plan_days ADD COLUMN notes TEXT", [])
                .map_err(|e| {
                    PlannerError::database_error("Failed to add notes column to plan_days table", e)
                })?;
        }

        Ok(())
    }
}
