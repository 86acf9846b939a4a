//! Data models for the mission database.

pub mod records;
pub mod schema;
pub mod value;

pub use records::{Employee, Facility, SecurityLog, Table};
pub use schema::{Column, Schema, TableSchema};
pub use value::{Row, Value};
