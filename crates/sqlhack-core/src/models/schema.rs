//! Live schema descriptions, as introspected from the database.

use serde::Serialize;

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    /// The declared type, as written in the `CREATE TABLE` statement.
    pub declared_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// A table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The columns flagged as part of the primary key.
    pub fn primary_key(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }
}

/// Every table in the database, in `sqlite_master` order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Schema(pub Vec<TableSchema>);

impl Schema {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.0.iter().find(|t| t.name == name)
    }

    /// Table names in schema order.
    pub fn table_names(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.name.as_str()).collect()
    }

    /// Check if no tables were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the tables.
    pub fn iter(&self) -> std::slice::Iter<'_, TableSchema> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a TableSchema;
    type IntoIter = std::slice::Iter<'a, TableSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
