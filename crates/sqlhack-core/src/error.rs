//! Error types for the game library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store and session operations.
#[derive(Error, Debug)]
pub enum GameError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors on the backing database file
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A table name that is not one of the seeded tables
    #[error("Unknown table '{name}'")]
    UnknownTable { name: String },
    /// Configuration and task plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GameError {
        GameError::Database {
            message: self.message,
            source,
        }
    }
}

impl GameError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// The innermost message, suitable for showing to a player.
    ///
    /// For database errors this is the SQLite message itself
    /// (`no such table: agents`) rather than the wrapping context.
    pub fn detail(&self) -> String {
        match self {
            GameError::Database { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GameError::database(message).with_source(e))
    }
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
