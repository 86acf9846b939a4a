//! Schema tree rendering.

use std::fmt;

use crate::models::Schema;

/// Renders a schema as a tree of tables and `column: TYPE` leaves.
///
/// ```text
/// 📋 TABLE: EMPLOYEES
///    └── id: INTEGER (PRIMARY KEY)
///    └── name: TEXT
/// ```
pub struct SchemaTree<'a>(pub &'a Schema);

impl fmt::Display for SchemaTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "📊 DATABASE SCHEMA:")?;
        writeln!(f, "{rule}")?;

        if self.0.is_empty() {
            writeln!(f)?;
            writeln!(f, "   No tables found")?;
        }

        for table in self.0 {
            writeln!(f)?;
            writeln!(f, "📋 TABLE: {}", table.name.to_uppercase())?;
            for column in &table.columns {
                let pk = if column.primary_key {
                    " (PRIMARY KEY)"
                } else {
                    ""
                };
                writeln!(f, "   └── {}: {}{pk}", column.name, column.declared_type)?;
            }
        }

        writeln!(f, "{rule}")
    }
}
