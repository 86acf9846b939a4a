//! Fixed-width sample tables and numbered query results.

use std::fmt;

use super::RULE_WIDTH;
use crate::models::Row;

/// Width of a sample table cell; longer values are cut.
pub const CELL_WIDTH: usize = 12;

fn cell(text: &str) -> String {
    let cut: String = text.chars().take(CELL_WIDTH).collect();
    format!("{:<width$}", cut, width = CELL_WIDTH)
}

/// A few rows of one table under a header of column names.
///
/// Each cell is cut to [`CELL_WIDTH`] characters and padded to that width.
/// The header names the requested `limit`, not the number of rows found.
pub struct SampleTable<'a> {
    pub table: &'a str,
    pub limit: usize,
    pub columns: Vec<&'a str>,
    pub rows: &'a [Row],
}

impl fmt::Display for SampleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "🔍 {} (showing first {} rows):",
            self.table.to_uppercase(),
            self.limit
        )?;

        if self.rows.is_empty() {
            return writeln!(f, "   No data available");
        }

        let header = self
            .columns
            .iter()
            .map(|c| cell(c))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(f, "   {header}")?;
        writeln!(f, "   {}", "-".repeat(header.chars().count()))?;

        for row in self.rows {
            let line = row
                .values()
                .iter()
                .map(|v| cell(&v.to_string()))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "   {line}")?;
        }
        Ok(())
    }
}

/// Query results as a numbered list of printed rows.
pub struct QueryResults<'a>(pub &'a [Row]);

impl fmt::Display for QueryResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "─".repeat(RULE_WIDTH);
        writeln!(f, "📊 QUERY RESULTS ({} rows):", self.0.len())?;
        writeln!(f, "{rule}")?;
        for (i, row) in self.0.iter().enumerate() {
            writeln!(f, "{:2}. {row}", i + 1)?;
        }
        writeln!(f, "{rule}")
    }
}
