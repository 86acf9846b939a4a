//! Display wrappers for terminal output.
//!
//! Domain types that have a single obvious rendering implement
//! [`std::fmt::Display`] directly ([`crate::models::Row`],
//! [`crate::session::MenuChoice`]). The newtype wrappers here format the
//! screens the console loop shows, so the same text can be tested without a
//! terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Schema, Row)   │───▶│ (SchemaTree,    │───▶│    Output       │
//! │                 │    │  SampleTable)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use sqlhack_core::{display::QueryResults, Row, Value};
//!
//! let rows = vec![Row(vec![Value::from("Marcus Steel")])];
//! let output = QueryResults(&rows).to_string();
//! assert!(output.contains(" 1. ('Marcus Steel',)"));
//! ```

pub mod mission;
pub mod schema;
pub mod tables;

pub use mission::{BriefingView, MissionSuccess};
pub use schema::SchemaTree;
pub use tables::{QueryResults, SampleTable};

/// Width of the rules drawn around most screens.
pub const RULE_WIDTH: usize = 50;
