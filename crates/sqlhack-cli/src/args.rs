use std::path::PathBuf;

use clap::{builder::FalseyValueParser, Parser, Subcommand};

/// Hacker-terminal text adventure that teaches SQL
///
/// You are the hacker on an infiltration crew. Query the target facility's
/// staff database to find the guard on duty at 1 AM and learn his weakness.
/// The mission database is seeded fresh on every run and purged on exit.
#[derive(Parser)]
#[command(version, about, name = "sqlhack")]
pub struct Args {
    /// Path to the SQLite mission database. Defaults to
    /// ./mission_database.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the loading animations
    #[arg(
        long,
        global = true,
        env = "SQLHACK_FAST",
        value_parser = FalseyValueParser::new()
    )]
    pub fast: bool,

    /// Leave the mission database on disk when the program exits
    #[arg(long, global = true)]
    pub keep_database: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// With no command the interactive game starts. `query` and `schema` run a
/// single action against a freshly seeded database and exit.
#[derive(Subcommand)]
pub enum Commands {
    /// Play the interactive mission (default)
    Play,
    /// Run one SQL query against the mission database
    #[command(alias = "q")]
    Query {
        /// SQL text to execute
        sql: String,
        /// Print the result rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the mission database schema
    Schema {
        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
}
