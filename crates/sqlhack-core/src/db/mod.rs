//! SQLite access for the mission database.
//!
//! This module provides the low-level, synchronous database operations. A
//! [`Database`] wraps one connection; the async [`crate::store::Store`]
//! opens a fresh one for every operation and drops it before returning.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod queries;
pub mod seed;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file without touching its contents.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens the database file, creates the mission tables and upserts the
    /// seed rows.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut db = Self::open(path)?;
        db.initialize()?;
        Ok(db)
    }

    /// Opens an in-memory database with the mission tables and seed rows.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        let mut db = Self::from_connection(connection)?;
        db.initialize()?;
        Ok(db)
    }

    /// Foreign keys stay declared but unenforced, so dangling references are
    /// accepted. Bundled SQLite turns enforcement on by default.
    fn from_connection(connection: Connection) -> Result<Self> {
        connection
            .pragma_update(None, "foreign_keys", false)
            .db_context("Failed to configure foreign keys")?;
        Ok(Self { connection })
    }

    /// Whether this connection enforces foreign key constraints.
    pub fn foreign_keys_enforced(&self) -> Result<bool> {
        self.connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get::<_, bool>(0))
            .db_context("Failed to read foreign key setting")
    }
}
