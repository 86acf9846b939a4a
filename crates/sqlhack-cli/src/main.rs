//! SQL Hacker CLI Application
//!
//! Hacker-terminal text adventure that teaches SQL against a seeded SQLite
//! mission database.

mod args;
mod commands;
mod game;
mod progress;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use log::info;
use progress::ProgressReporter;
use renderer::TerminalRenderer;
use sqlhack_core::StoreBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(run(args));

    // A pending stdin read cannot be cancelled; don't wait for it on exit
    runtime.shutdown_background();
    result
}

async fn run(args: Args) -> Result<()> {
    let Args {
        database_file,
        no_color,
        fast,
        keep_database,
        command,
    } = args;

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build();
    let renderer = TerminalRenderer::new(!no_color);
    let progress = ProgressReporter::from_fast_flag(fast);

    info!("SQL Hacker started with database {}", store.db_path().display());

    let command = command.unwrap_or(Commands::Play);
    let interactive = matches!(command, Commands::Play);

    let result = match command {
        Commands::Play => commands::play(store.clone(), TerminalRenderer::new(!no_color), progress)
            .await
            .map(|state| info!("Game ended in state {state:?}")),
        Commands::Query { sql, json } => commands::query(&store, &renderer, &sql, json).await,
        Commands::Schema { json } => commands::schema(&store, &renderer, json).await,
    };

    // Teardown runs however the command ended
    let cleanup = commands::cleanup(&store, &renderer, progress, keep_database, interactive)
        .await
        .context("Cleanup failed");

    result.and(cleanup)
}
