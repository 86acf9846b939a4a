//! Raw query execution and schema introspection.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Column, Row, Schema, TableSchema, Value},
};

impl super::Database {
    /// Runs arbitrary SQL text and collects every returned row.
    ///
    /// Statements that produce no columns (DDL, DML) run to completion and
    /// yield no rows. Only a single statement is accepted.
    pub fn query(&self, sql: &str) -> Result<Vec<Row>> {
        let sql = sql
            .trim()
            .trim_end_matches(|c: char| c == ';' || c.is_whitespace());

        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;
        let column_count = stmt.column_count();

        let mut rows = stmt.query([]).db_context("Failed to execute query")?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().db_context("Failed to read result row")? {
            let values = (0..column_count)
                .map(|i| row.get_ref(i).map(Value::from))
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read column value")?;
            results.push(Row(values));
        }

        Ok(results)
    }

    /// Introspects every table and its columns from the live database.
    pub fn schema(&self) -> Result<Schema> {
        let mut stmt = self
            .connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY rowid")
            .db_context("Failed to list tables")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to list tables")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read table name")?;

        names
            .into_iter()
            .map(|name| {
                let columns = self.table_columns(&name)?;
                Ok(TableSchema { name, columns })
            })
            .collect::<Result<Vec<_>>>()
            .map(Schema)
    }

    fn table_columns(&self, table: &str) -> Result<Vec<Column>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
            )
            .db_context("Failed to read table info")?;

        let columns = stmt
            .query_map(params![table], |row| {
                Ok(Column {
                    name: row.get(0)?,
                    declared_type: row.get(1)?,
                    not_null: row.get::<_, i64>(2)? != 0,
                    primary_key: row.get::<_, i64>(3)? > 0,
                })
            })
            .db_context("Failed to read table info")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read column info")?;

        Ok(columns)
    }

    /// Fetches up to `limit` rows from `table` in storage order.
    pub fn sample_rows(&self, table: &str, limit: usize) -> Result<Vec<Row>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let sql = format!("SELECT * FROM {} LIMIT ?1", quote_identifier(table));

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare sample query")?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params![limit], |row| {
                (0..column_count)
                    .map(|i| row.get_ref(i).map(Value::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map(Row)
            })
            .db_context("Failed to fetch sample rows")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read sample row")?;

        Ok(rows)
    }

    /// Counts the rows in `table`.
    pub fn count_rows(&self, table: &str) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        self.connection
            .query_row(&sql, [], |row| row.get::<_, i64>(0))
            .map(|count| count.max(0) as u64)
            .db_context("Failed to count rows")
    }
}

/// Quotes a table name as an SQL identifier.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
