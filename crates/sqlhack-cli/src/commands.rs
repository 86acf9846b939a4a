//! Top-level command handlers.

use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::Serialize;
use sqlhack_core::{display::SchemaTree, GameState, Mission, QueryOutcome, Row, Store};
use tokio::{io::BufReader, signal};

use crate::{
    game::{render_outcome, Game},
    progress::ProgressReporter,
    renderer::TerminalRenderer,
};

/// JSON shape printed by `query --json`.
#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    rows: &'a [Row],
    error: Option<&'a str>,
    solved: bool,
}

/// Seeds the store, reporting failure without aborting.
async fn initialize_store<W: Write>(
    store: &Store,
    renderer: &TerminalRenderer,
    progress: ProgressReporter,
    out: &mut W,
) -> Result<()> {
    progress
        .run(out, "Initializing secure database tables", Duration::from_secs(5))
        .await?;

    match store.initialize().await {
        Ok(()) => {
            progress
                .run(out, "Encrypting database records", Duration::from_millis(3500))
                .await?;
        }
        Err(e) => {
            error!("Database setup failed: {e}");
            renderer.error(out, &format!("Database setup error - {}", e.detail()))?;
        }
    }
    Ok(())
}

/// Resolves when the player sends an interrupt. Never resolves if the
/// signal handler cannot be installed.
async fn interrupted() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Cannot listen for interrupts: {e}");
        std::future::pending::<()>().await;
    }
}

/// Runs the interactive game on stdin and stdout.
pub async fn play(
    store: Store,
    renderer: TerminalRenderer,
    progress: ProgressReporter,
) -> Result<GameState> {
    let mut out = io::stdout();

    writeln!(out, "🔐 Initializing Cyber Operations...")?;
    progress
        .run(&mut out, "Establishing secure database connection", Duration::from_secs(4))
        .await?;
    initialize_store(&store, &renderer, progress, &mut out).await?;
    writeln!(out, "✅ Connection established. Welcome, Agent.")?;

    let input = BufReader::new(tokio::io::stdin());
    let mut game = Game::new(store, Mission::first(), renderer, progress, input, out);

    game.run_until(interrupted()).await
}

/// Runs a single query against a freshly seeded store.
pub async fn query(
    store: &Store,
    renderer: &TerminalRenderer,
    sql: &str,
    json: bool,
) -> Result<()> {
    let mut out = io::stdout();
    initialize_store(store, renderer, ProgressReporter::Silent, &mut io::stderr()).await?;

    let outcome = store.run_query(sql).await;
    let mission = Mission::first();
    let solved = mission.is_solved_by(sql, outcome.rows());
    info!("One-shot query solved mission {}: {solved}", mission.number());

    if json {
        let report = QueryReport {
            query: sql,
            rows: outcome.rows(),
            error: match &outcome {
                QueryOutcome::Failed(message) => Some(message.as_str()),
                QueryOutcome::Rows(_) => None,
            },
            solved,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize query report")?;
        writeln!(out, "{json}")?;
    } else {
        render_outcome(renderer, &mut out, &outcome)?;
        let status = if solved { "SOLVED" } else { "not solved" };
        writeln!(out, "{mission}: {status}")?;
    }
    Ok(())
}

/// Prints the schema of a freshly seeded store.
pub async fn schema(store: &Store, renderer: &TerminalRenderer, json: bool) -> Result<()> {
    let mut out = io::stdout();
    initialize_store(store, renderer, ProgressReporter::Silent, &mut io::stderr()).await?;

    let schema = store.schema().await;
    if json {
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        writeln!(out, "{json}")?;
    } else {
        renderer.text(&mut out, &SchemaTree(&schema).to_string())?;
    }
    Ok(())
}

/// Removes the mission database unless asked to keep it. Narrates when
/// `verbose` is set.
pub async fn cleanup(
    store: &Store,
    renderer: &TerminalRenderer,
    progress: ProgressReporter,
    keep_database: bool,
    verbose: bool,
) -> Result<()> {
    let mut out = io::stdout();
    let progress = if verbose { progress } else { ProgressReporter::Silent };

    if verbose {
        writeln!(out, "\n🧹 Cleaning up...")?;
    }

    if keep_database {
        info!("Keeping mission database at {}", store.db_path().display());
        if verbose {
            writeln!(out, "💾 Mission database kept at {}", store.db_path().display())?;
        }
        return Ok(());
    }

    progress
        .run(&mut out, "Purging mission database", Duration::from_secs(3))
        .await?;
    match store.teardown().await {
        Ok(removed) => {
            if removed && verbose {
                writeln!(out, "🗑️ Database file cleaned up")?;
            }
        }
        Err(e) => {
            warn!("Failed to remove mission database: {e}");
            renderer.error(&mut io::stderr(), &format!("Cleanup failed - {e}"))?;
        }
    }

    if verbose {
        writeln!(out, "Mission database purged. Stay safe, Agent.")?;
    }
    Ok(())
}
