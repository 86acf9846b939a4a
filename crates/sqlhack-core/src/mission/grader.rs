//! Strategies for deciding whether a query solves a mission.

use crate::models::Row;

/// Decides whether a submitted query and the rows it returned solve a
/// mission.
pub trait Grader: Send + Sync {
    fn evaluate(&self, query: &str, rows: &[Row]) -> bool;
}

/// Grades by substring matching on the query text and on printed rows.
///
/// The lower-cased query must contain at least one of `query_any` and every
/// entry of `query_all`. At least one row's printed form must contain every
/// entry of `row_all`, case-sensitively. Nothing checks that the query is
/// semantically right; a query that happens to contain the keywords passes.
#[derive(Debug, Clone, Copy)]
pub struct SubstringGrader {
    pub query_any: &'static [&'static str],
    pub query_all: &'static [&'static str],
    pub row_all: &'static [&'static str],
}

impl SubstringGrader {
    fn query_matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let any = self.query_any.is_empty() || self.query_any.iter().any(|s| query.contains(s));
        any && self.query_all.iter().all(|s| query.contains(s))
    }

    fn row_matches(&self, row: &Row) -> bool {
        let printed = row.to_string();
        self.row_all.iter().all(|s| printed.contains(s))
    }
}

impl Grader for SubstringGrader {
    fn evaluate(&self, query: &str, rows: &[Row]) -> bool {
        self.query_matches(query) && rows.iter().any(|row| self.row_matches(row))
    }
}
