//! Typed seed records for the three mission tables.

use std::{fmt, str::FromStr};

use super::value::{Row, Value};
use crate::error::GameError;

/// The fixed tables created at store initialization.
///
/// Menu actions that need a table name go through this allow-list instead of
/// taking free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Employees,
    SecurityLogs,
    Facilities,
}

impl Table {
    /// All seeded tables, in creation order.
    pub const ALL: [Table; 3] = [Table::Employees, Table::SecurityLogs, Table::Facilities];

    /// The SQL table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Employees => "employees",
            Table::SecurityLogs => "security_logs",
            Table::Facilities => "facilities",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employees" => Ok(Table::Employees),
            "security_logs" => Ok(Table::SecurityLogs),
            "facilities" => Ok(Table::Facilities),
            _ => Err(GameError::UnknownTable {
                name: s.to_string(),
            }),
        }
    }
}

/// A member of staff at the target facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: &'static str,
    pub department: &'static str,
    pub clearance_level: i64,
    /// Shift start as `HH:MM`
    pub shift_start: &'static str,
    /// Shift end as `HH:MM`; earlier than the start for overnight shifts
    pub shift_end: &'static str,
    pub weakness: &'static str,
}

/// A badge or patrol event recorded by the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityLog {
    pub id: i64,
    pub employee_id: i64,
    pub location: &'static str,
    pub access_time: &'static str,
    pub action: &'static str,
}

/// A room in the facility and the guard assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facility {
    pub id: i64,
    pub room_name: &'static str,
    pub floor: i64,
    pub security_level: i64,
    pub guard_id: i64,
}

impl From<&Employee> for Row {
    fn from(e: &Employee) -> Self {
        Row(vec![
            Value::from(e.id),
            Value::from(e.name),
            Value::from(e.department),
            Value::from(e.clearance_level),
            Value::from(e.shift_start),
            Value::from(e.shift_end),
            Value::from(e.weakness),
        ])
    }
}

impl From<&SecurityLog> for Row {
    fn from(l: &SecurityLog) -> Self {
        Row(vec![
            Value::from(l.id),
            Value::from(l.employee_id),
            Value::from(l.location),
            Value::from(l.access_time),
            Value::from(l.action),
        ])
    }
}

impl From<&Facility> for Row {
    fn from(f: &Facility) -> Self {
        Row(vec![
            Value::from(f.id),
            Value::from(f.room_name),
            Value::from(f.floor),
            Value::from(f.security_level),
            Value::from(f.guard_id),
        ])
    }
}
