//! Core library for the SQL Hacker game.
//!
//! This crate provides everything the game needs apart from the console: the
//! seeded mission database, missions and their graders, the session state
//! machine, and the text screens.
//!
//! - [`store`]: async facade over a SQLite file; one connection per call
//! - [`db`]: synchronous SQLite operations, schema and seed data
//! - [`mission`]: mission briefings and pluggable [`Grader`]s
//! - [`session`]: menu parsing and the [`GameState`] machine
//! - [`display`]: Display wrappers for each screen
//!
//! # Quick Start
//!
//! ```rust
//! use sqlhack_core::{Mission, Session, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("mission.db"))
//!     .build();
//! store.initialize().await?;
//!
//! let mut session = Session::new(Mission::first());
//! let query = "SELECT name, weakness FROM employees WHERE shift_start > shift_end";
//! let rows = store.execute_query(query).await;
//! if session.record_query(query, &rows) {
//!     println!("Mission complete");
//! }
//!
//! store.teardown().await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod mission;
pub mod models;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use error::{GameError, Result};
pub use mission::{Briefing, Grader, Mission, SubstringGrader};
pub use models::{Column, Employee, Facility, Row, Schema, SecurityLog, Table, TableSchema, Value};
pub use session::{GameState, MenuChoice, Session};
pub use store::{QueryOutcome, Store, StoreBuilder, DEFAULT_DATABASE_FILE};
