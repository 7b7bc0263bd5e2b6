//! Database operations and SQLite management for plans and reading days.
//!
//! This module provides low-level database operations for the Lectio reading
//! plan system. It handles SQLite database connections, schema management,
//! and provides specialized query interfaces for plans and their days.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod day_queries;
pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
