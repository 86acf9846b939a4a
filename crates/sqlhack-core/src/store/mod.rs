//! Async facade over the mission database.
//!
//! The [`Store`] owns nothing but the database path. Every operation runs on
//! the blocking thread pool, opens its own connection, and closes it before
//! returning, so there is no pooling and no transaction spanning two calls.
//!
//! Query, schema and sample operations fail soft: errors are logged here and
//! callers see an empty result. [`Store::run_query`] is the exception, since
//! the query terminal needs to tell "no rows" apart from "bad SQL".
//!
//! ```rust
//! use sqlhack_core::StoreBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("mission.db"))
//!     .build();
//! store.initialize().await?;
//!
//! let rows = store
//!     .execute_query("SELECT name FROM employees WHERE department = 'Security'")
//!     .await;
//! assert_eq!(rows.len(), 2);
//!
//! store.teardown().await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{GameError, Result},
    models::Row,
};

pub mod builder;
pub mod ops;

#[cfg(test)]
mod tests;

pub use builder::{StoreBuilder, DEFAULT_DATABASE_FILE};

/// Outcome of running player-supplied SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The statement ran; it may have returned no rows.
    Rows(Vec<Row>),
    /// The statement could not be prepared or executed.
    Failed(String),
}

impl QueryOutcome {
    /// Check if the query failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }

    /// The returned rows; empty for failures.
    pub fn rows(&self) -> &[Row] {
        match self {
            QueryOutcome::Rows(rows) => rows,
            QueryOutcome::Failed(_) => &[],
        }
    }

    /// Consume the outcome, dropping any failure message.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            QueryOutcome::Rows(rows) => rows,
            QueryOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Handle to the mission database file.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) db_path: PathBuf,
}

impl Store {
    /// Creates a store handle for the given path. Nothing touches the disk
    /// until [`Store::initialize`].
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a connection on the blocking pool and runs `f` against it.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::open(&db_path)?;
            f(db)
        })
        .await
        .map_err(|e| GameError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
