//! Interactive console loop.
//!
//! [`Game`] drives a [`Session`] from line-oriented input: show the menu,
//! read a choice, run the matching tool against the [`Store`], render, and
//! repeat until the session reaches a terminal state. Input and output are
//! generic so tests can script a whole play-through.

use std::{future::Future, io::Write, time::Duration};

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::{debug, error, info, warn};
use sqlhack_core::{
    display::{BriefingView, MissionSuccess, QueryResults, SampleTable, SchemaTree, RULE_WIDTH},
    GameState, MenuChoice, Mission, QueryOutcome, Session, Store, Table,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::{progress::ProgressReporter, renderer::TerminalRenderer};

const HEADER_WIDTH: usize = 70;

const BANNER: [&str; 2] = [
    "█▀▀ ▄▀█ █▄█ █▄▄ █▀▀ █▀█   █▀█ █▀█ █▀▀ █▀█ ▄▀█ ▀█▀ █ █▀█ █▄░█ █▀",
    "█▄▄ █▀█ ░█░ █▄█ █▄▄ █▀▄   █▄█ █▀▀ █▄▄ █▀▄ █▀█ ░█░ █ █▄█ █░▀█ ▄█",
];

/// Rows shown per table in the sample view.
const SAMPLE_LIMIT: usize = 3;

/// Typed at the SQL prompt to go back without running anything.
const BACK_COMMAND: &str = "back";

/// Renders the outcome of a player query.
pub fn render_outcome<W: Write>(
    renderer: &TerminalRenderer,
    out: &mut W,
    outcome: &QueryOutcome,
) -> std::io::Result<()> {
    match outcome {
        QueryOutcome::Rows(rows) if !rows.is_empty() => {
            renderer.text(out, &QueryResults(rows).to_string())
        }
        QueryOutcome::Rows(_) => renderer.error(out, "No results found."),
        QueryOutcome::Failed(message) => renderer.error(out, &format!("Query error: {message}")),
    }
}

/// One interactive play-through.
pub struct Game<R, W> {
    store: Store,
    session: Session,
    renderer: TerminalRenderer,
    progress: ProgressReporter,
    input: Lines<R>,
    out: W,
}

impl<R, W> Game<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        store: Store,
        mission: Mission,
        renderer: TerminalRenderer,
        progress: ProgressReporter,
        input: R,
        out: W,
    ) -> Self {
        Self {
            store,
            session: Session::new(mission),
            renderer,
            progress,
            input: input.lines(),
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the menu loop until the mission is complete, the player quits,
    /// or input runs out.
    ///
    /// A failing tool is reported and the loop carries on at the menu. Only
    /// failures to read input end the loop with an error.
    pub async fn run(&mut self) -> Result<GameState> {
        debug!("Starting main game loop");

        while !self.session.is_over() {
            self.show_menu_screen()?;

            let Some(line) = self.read_line("\n🔧 Select tool: ").await? else {
                info!("Input closed, leaving the game");
                self.session.quit();
                break;
            };
            debug!("User selected: {line:?}");

            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    if let Err(e) = self.handle_choice(choice).await {
                        self.report_fault(&e).await?;
                    }
                }
                Err(input) => {
                    self.renderer
                        .error(&mut self.out, &format!("Invalid command: {input}. Try again."))?;
                }
            }
        }

        info!("Game loop finished in state {:?}", self.session.state());
        Ok(self.session.state())
    }

    /// Runs the menu loop until it finishes or `interrupt` resolves. An
    /// interrupt cancels any pending prompt and ends the session as
    /// [`GameState::Interrupted`].
    pub async fn run_until<F>(&mut self, interrupt: F) -> Result<GameState>
    where
        F: Future<Output = ()>,
    {
        let finished = tokio::select! {
            result = self.run() => Some(result),
            () = interrupt => None,
        };

        match finished {
            Some(result) => result,
            None => {
                self.interrupt()?;
                Ok(GameState::Interrupted)
            }
        }
    }

    /// Ends the session after an interrupt signal.
    pub fn interrupt(&mut self) -> Result<()> {
        warn!("Interrupt received, shutting down");
        self.session.interrupt();
        writeln!(self.out, "\n\n🛑 Interrupt received")?;
        writeln!(self.out, "🔒 Emergency shutdown initiated...")?;
        Ok(())
    }

    async fn handle_choice(&mut self, choice: MenuChoice) -> Result<()> {
        match self.session.choose(choice) {
            GameState::ViewingSchema => {
                self.show_schema().await?;
                self.pause().await?;
            }
            GameState::ViewingSamples => {
                self.show_samples().await?;
                self.pause().await?;
            }
            GameState::Debug => {
                self.show_debug()?;
                self.pause().await?;
            }
            GameState::QueryTerminal => return self.query_terminal().await,
            GameState::Quit => {
                writeln!(self.out, "\n🔒 Disconnecting from secure database...")?;
                writeln!(self.out, "🚪 Exiting Cyber Operations...")?;
                return Ok(());
            }
            GameState::Browsing
            | GameState::MissionComplete
            | GameState::Interrupted => {}
        }

        self.session.return_to_menu();
        Ok(())
    }

    async fn report_fault(&mut self, e: &anyhow::Error) -> Result<()> {
        error!("Unexpected error while handling menu choice: {e:#}");
        self.renderer
            .error(&mut self.out, &format!("Unexpected error - {e:#}"))?;
        writeln!(self.out, "🔧 Please report this bug!")?;
        self.session.return_to_menu();
        self.pause().await
    }

    fn show_menu_screen(&mut self) -> Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        let mission = self.session.mission();

        writeln!(self.out)?;
        self.renderer.banner(&mut self.out, &rule)?;
        for line in BANNER {
            self.renderer.banner(&mut self.out, line)?;
        }
        self.renderer.banner(&mut self.out, &rule)?;
        self.renderer
            .banner(&mut self.out, &format!("MISSION {} - ACTIVE", mission.number()))?;
        self.renderer.banner(&mut self.out, &rule)?;

        writeln!(self.out)?;
        self.renderer
            .text(&mut self.out, &BriefingView(mission).to_string())?;

        writeln!(self.out)?;
        self.renderer
            .markdown(&mut self.out, "🔧 **HACKER TOOLS AVAILABLE:**")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{choice}")?;
        }
        writeln!(self.out, "{}", "─".repeat(RULE_WIDTH))?;
        Ok(())
    }

    async fn show_schema(&mut self) -> Result<()> {
        self.progress
            .run(
                &mut self.out,
                "Scanning database architecture",
                ProgressReporter::random_duration(),
            )
            .await?;
        let schema = self.store.schema().await;

        writeln!(self.out)?;
        self.renderer
            .text(&mut self.out, &SchemaTree(&schema).to_string())?;
        Ok(())
    }

    async fn show_samples(&mut self) -> Result<()> {
        writeln!(self.out, "\n📋 SAMPLE DATA:")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;

        for table in Table::ALL {
            self.progress
                .run(
                    &mut self.out,
                    &format!("Accessing {table} records"),
                    ProgressReporter::random_duration(),
                )
                .await?;
            let rows = self.store.sample_rows(table.as_str(), SAMPLE_LIMIT).await;

            // Columns come from the live schema so player DDL shows up here too
            let schema = self.store.schema().await;
            let columns = schema
                .table(table.as_str())
                .map(|t| t.column_names())
                .unwrap_or_default();

            writeln!(self.out)?;
            let view = SampleTable {
                table: table.as_str(),
                limit: SAMPLE_LIMIT,
                columns,
                rows: &rows,
            };
            self.renderer.text(&mut self.out, &view.to_string())?;
        }

        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn show_debug(&mut self) -> Result<()> {
        let mission = self.session.mission();
        let started_at = self.session.started_at();
        let uptime = Timestamp::now().duration_since(started_at);

        writeln!(self.out, "\n🐛 DEBUG INFO:")?;
        writeln!(
            self.out,
            "   Current Mission: {} ({})",
            mission.number(),
            mission.briefing().title
        )?;
        writeln!(
            self.out,
            "   Mission Complete: {}",
            self.session.mission_complete()
        )?;
        writeln!(self.out, "   Database Path: {}", self.store.db_path().display())?;
        writeln!(self.out, "   Session Started: {started_at}")?;
        writeln!(self.out, "   Session Uptime: {}s", uptime.as_secs())?;
        writeln!(self.out, "   Queries Run: {}", self.session.queries_run())?;
        Ok(())
    }

    async fn query_terminal(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.renderer
            .markdown(&mut self.out, "💻 **SQL TERMINAL ACTIVE**")?;
        writeln!(self.out, "Enter your SQL query (or '{BACK_COMMAND}' to return):")?;
        writeln!(self.out, "{}", ">".repeat(RULE_WIDTH))?;

        let Some(line) = self.read_line("SQL> ").await? else {
            self.session.quit();
            return Ok(());
        };
        let query = line.trim();
        debug!("User entered query: {query:?}");

        if query.is_empty() || query.eq_ignore_ascii_case(BACK_COMMAND) {
            self.session.return_to_menu();
            return Ok(());
        }

        writeln!(self.out, "\n⚡ Executing: {query}")?;
        self.progress
            .run(
                &mut self.out,
                ProgressReporter::random_query_message(),
                ProgressReporter::random_duration(),
            )
            .await?;
        let outcome = self.store.run_query(query).await;

        writeln!(self.out)?;
        render_outcome(&self.renderer, &mut self.out, &outcome)?;

        if self.session.record_query(query, outcome.rows()) {
            writeln!(self.out)?;
            self.renderer.text(
                &mut self.out,
                &MissionSuccess(self.session.mission()).to_string(),
            )?;
            self.progress
                .run(&mut self.out, "Returning to base", Duration::from_secs(3))
                .await?;
            return Ok(());
        }

        if !outcome.rows().is_empty() {
            writeln!(self.out)?;
            self.renderer
                .markdown(&mut self.out, "💡 *Good data, but keep investigating...*")?;
        }
        self.pause().await
    }

    /// Shows a prompt and reads one line. `None` means input is closed.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.renderer.prompt(&mut self.out, prompt)?;
        let line = self
            .input
            .next_line()
            .await
            .context("Failed to read from input")?;
        if line.is_none() {
            writeln!(self.out)?;
        }
        Ok(line)
    }

    async fn pause(&mut self) -> Result<()> {
        self.read_line("\nPress Enter to continue...").await?;
        Ok(())
    }
}
