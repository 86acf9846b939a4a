//! Store operations.

use log::{debug, warn};

use super::{QueryOutcome, Store};
use crate::{
    error::{GameError, Result},
    models::{Row, Schema},
};

impl Store {
    /// Creates the backing file and the three mission tables, then upserts
    /// the seed rows. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GameError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        debug!("Initializing mission database at {}", self.db_path.display());
        self.with_database(|mut db| db.initialize()).await
    }

    /// Runs player-supplied SQL and reports either the rows or the failure.
    pub async fn run_query(&self, sql: &str) -> QueryOutcome {
        debug!("Executing query: {sql}");
        let sql = sql.to_string();

        match self.with_database(move |db| db.query(&sql)).await {
            Ok(rows) => {
                debug!("Query returned {} rows", rows.len());
                QueryOutcome::Rows(rows)
            }
            Err(e) => {
                warn!("Query failed: {e}");
                QueryOutcome::Failed(e.detail())
            }
        }
    }

    /// Runs player-supplied SQL, returning no rows when it fails.
    pub async fn execute_query(&self, sql: &str) -> Vec<Row> {
        self.run_query(sql).await.into_rows()
    }

    /// Introspects the live schema. Returns an empty schema on failure.
    pub async fn schema(&self) -> Schema {
        match self.with_database(|db| db.schema()).await {
            Ok(schema) => {
                debug!("Schema fetched for {} tables", schema.len());
                schema
            }
            Err(e) => {
                warn!("Schema fetch failed: {e}");
                Schema::default()
            }
        }
    }

    /// Fetches up to `limit` rows from `table`. Returns no rows on failure.
    pub async fn sample_rows(&self, table: &str, limit: usize) -> Vec<Row> {
        let name = table.to_string();

        match self
            .with_database(move |db| db.sample_rows(&name, limit))
            .await
        {
            Ok(rows) => {
                debug!("Fetched {} sample rows from {table}", rows.len());
                rows
            }
            Err(e) => {
                warn!("Sample fetch from {table} failed: {e}");
                Vec::new()
            }
        }
    }

    /// Deletes the backing file. Returns whether a file was removed.
    pub async fn teardown(&self) -> Result<bool> {
        match tokio::fs::remove_file(&self.db_path).await {
            Ok(()) => {
                debug!("Removed mission database {}", self.db_path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GameError::FileSystem {
                path: self.db_path.clone(),
                source: e,
            }),
        }
    }
}
