//! Database schema initialization and seeding.

use rusqlite::params;

use super::seed::{EMPLOYEES, FACILITIES, SECURITY_LOGS};
use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Creates the mission tables and upserts the seed rows.
    pub fn initialize(&mut self) -> Result<()> {
        self.initialize_schema()?;
        self.seed()
    }

    /// Creates the mission tables if they do not exist yet.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Upserts every seed row by primary key, so repeated calls leave the
    /// tables unchanged.
    fn seed(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin seed transaction")?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT OR REPLACE INTO employees
                     (id, name, department, clearance_level, shift_start, shift_end, weakness)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                )
                .db_context("Failed to prepare employee seed")?;
            for e in EMPLOYEES {
                stmt.execute(params![
                    e.id,
                    e.name,
                    e.department,
                    e.clearance_level,
                    e.shift_start,
                    e.shift_end,
                    e.weakness
                ])
                .db_context("Failed to seed employees")?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT OR REPLACE INTO security_logs
                     (id, employee_id, location, access_time, action)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .db_context("Failed to prepare security log seed")?;
            for l in SECURITY_LOGS {
                stmt.execute(params![l.id, l.employee_id, l.location, l.access_time, l.action])
                    .db_context("Failed to seed security logs")?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT OR REPLACE INTO facilities
                     (id, room_name, floor, security_level, guard_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .db_context("Failed to prepare facility seed")?;
            for f in FACILITIES {
                stmt.execute(params![f.id, f.room_name, f.floor, f.security_level, f.guard_id])
                    .db_context("Failed to seed facilities")?;
            }
        }

        tx.commit().db_context("Failed to commit seed data")
    }
}
