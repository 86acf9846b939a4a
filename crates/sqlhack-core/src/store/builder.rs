//! Builder for creating and configuring Store instances.

use std::path::{Path, PathBuf};

use super::Store;

/// File name used when no database path is configured, relative to the
/// working directory.
pub const DEFAULT_DATABASE_FILE: &str = "mission_database.db";

/// Builder for creating and configuring Store instances.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses [`DEFAULT_DATABASE_FILE`] in the current
    /// working directory.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store handle. The database is created by
    /// [`Store::initialize`], not here.
    pub fn build(self) -> Store {
        let db_path = self
            .database_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE));
        Store::new(db_path)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let store = StoreBuilder::new().build();
        assert_eq!(store.db_path(), Path::new(DEFAULT_DATABASE_FILE));
    }

    #[test]
    fn test_custom_path_overrides_default() {
        let store = StoreBuilder::new()
            .with_database_path(Some("/tmp/other.db"))
            .build();
        assert_eq!(store.db_path(), Path::new("/tmp/other.db"));
    }

    #[test]
    fn test_none_keeps_default() {
        let store = StoreBuilder::new()
            .with_database_path(None::<&str>)
            .build();
        assert_eq!(store.db_path(), Path::new(DEFAULT_DATABASE_FILE));
    }
}
