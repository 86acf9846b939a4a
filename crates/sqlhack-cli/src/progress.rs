//! Cosmetic loading animation.
//!
//! The animation only consumes wall-clock time while printing dots. Nothing
//! depends on it, so tests and `--fast` runs swap in [`ProgressReporter::Instant`]
//! or [`ProgressReporter::Silent`].

use std::{
    io::{self, Write},
    time::Duration,
};

use rand::{seq::SliceRandom, Rng};

/// Messages shown while a player's query runs.
pub const QUERY_MESSAGES: [&str; 5] = [
    "Penetrating database firewall",
    "Bypassing security protocols",
    "Decrypting data streams",
    "Analyzing target database",
    "Extracting classified information",
];

const DOTS_PER_SECOND: f64 = 2.0;

/// How loading steps are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressReporter {
    /// Print dots over the requested duration
    Animated,
    /// Print the step and its completion marker without waiting
    Instant,
    /// Print nothing
    Silent,
}

impl ProgressReporter {
    /// Picks the reporter for the `--fast` flag.
    pub fn from_fast_flag(fast: bool) -> Self {
        if fast {
            ProgressReporter::Instant
        } else {
            ProgressReporter::Animated
        }
    }

    /// A random duration between three and eight seconds.
    pub fn random_duration() -> Duration {
        Duration::from_secs_f64(rand::thread_rng().gen_range(3.0..8.0))
    }

    /// A random themed message for query execution.
    pub fn random_query_message() -> &'static str {
        QUERY_MESSAGES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(QUERY_MESSAGES[0])
    }

    /// Shows one loading step taking `duration`.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        message: &str,
        duration: Duration,
    ) -> io::Result<()> {
        match self {
            ProgressReporter::Silent => Ok(()),
            ProgressReporter::Instant => writeln!(out, "⚡ {message}... ✅ COMPLETE"),
            ProgressReporter::Animated => {
                write!(out, "⚡ {message}")?;
                out.flush()?;

                let dots = ((duration.as_secs_f64() * DOTS_PER_SECOND) as u32).max(1);
                let delay = duration / dots;
                for _ in 0..dots {
                    write!(out, ".")?;
                    out.flush()?;
                    tokio::time::sleep(delay).await;
                }
                writeln!(out, " ✅ COMPLETE")
            }
        }
    }
}
