//! Game session state: menu choices, the state machine and mission
//! progress.
//!
//! The session is interface-agnostic. A console loop parses input into a
//! [`MenuChoice`], calls [`Session::choose`], renders whatever the resulting
//! [`GameState`] calls for, and then calls [`Session::return_to_menu`],
//! [`Session::record_query`] or one of the terminal transitions.
//!
//! ```text
//!             ┌──────────────► ViewingSchema ──┐
//!             ├──────────────► ViewingSamples ─┤
//!  Browsing ──┼──────────────► Debug ──────────┤──► Browsing
//!             ├──────────────► QueryTerminal ──┘
//!             │                      │ solved
//!             │                      ▼
//!             │               MissionComplete
//!             ├──────────────► Quit
//!             └──────────────► Interrupted
//! ```

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use log::debug;

use crate::{mission::Mission, models::Row};


/// A tool picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Schema,
    Query,
    Samples,
    Debug,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order; the digit for each is its position
    /// plus one.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Schema,
        MenuChoice::Query,
        MenuChoice::Samples,
        MenuChoice::Debug,
        MenuChoice::Quit,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            MenuChoice::Schema => "SCHEMA",
            MenuChoice::Query => "QUERY",
            MenuChoice::Samples => "SAMPLES",
            MenuChoice::Debug => "DEBUG",
            MenuChoice::Quit => "QUIT",
        }
    }

    pub fn digit(&self) -> u8 {
        match self {
            MenuChoice::Schema => 1,
            MenuChoice::Query => 2,
            MenuChoice::Samples => 3,
            MenuChoice::Debug => 4,
            MenuChoice::Quit => 5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuChoice::Schema => "View database structure",
            MenuChoice::Query => "Execute SQL command",
            MenuChoice::Samples => "View sample data from tables",
            MenuChoice::Debug => "Show session diagnostics",
            MenuChoice::Quit => "Exit system",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_uppercase();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| input == choice.keyword() || input == choice.digit().to_string())
            .ok_or(input)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. [{}] - {}", self.digit(), self.keyword(), self.description())
    }
}

/// Where the player currently is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Main menu is shown
    #[default]
    Browsing,
    ViewingSchema,
    ViewingSamples,
    QueryTerminal,
    Debug,
    /// The mission was solved; the game is over
    MissionComplete,
    /// The player chose to quit, or input ran out
    Quit,
    /// The player aborted with an interrupt signal
    Interrupted,
}

impl GameState {
    /// Check if the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameState::MissionComplete | GameState::Quit | GameState::Interrupted
        )
    }
}

/// One play-through of a mission.
#[derive(Debug, Clone)]
pub struct Session {
    mission: Mission,
    state: GameState,
    started_at: Timestamp,
    queries_run: u32,
}

impl Session {
    /// Starts a session at the main menu.
    pub fn new(mission: Mission) -> Self {
        Self {
            mission,
            state: GameState::Browsing,
            started_at: Timestamp::now(),
            queries_run: 0,
        }
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Number of queries submitted to the terminal so far.
    pub fn queries_run(&self) -> u32 {
        self.queries_run
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn mission_complete(&self) -> bool {
        self.state == GameState::MissionComplete
    }

    /// Applies a menu choice. Ignored once the game is over.
    pub fn choose(&mut self, choice: MenuChoice) -> GameState {
        if self.is_over() {
            return self.state;
        }
        self.state = match choice {
            MenuChoice::Schema => GameState::ViewingSchema,
            MenuChoice::Query => GameState::QueryTerminal,
            MenuChoice::Samples => GameState::ViewingSamples,
            MenuChoice::Debug => GameState::Debug,
            MenuChoice::Quit => GameState::Quit,
        };
        debug!("Menu choice {choice:?} -> {:?}", self.state);
        self.state
    }

    /// Returns to the main menu after a view finishes.
    pub fn return_to_menu(&mut self) {
        if !self.is_over() {
            self.state = GameState::Browsing;
        }
    }

    /// Records a query submitted from the terminal and grades it.
    ///
    /// Returns `true` and moves to [`GameState::MissionComplete`] when the
    /// mission is solved; otherwise the session goes back to the menu.
    pub fn record_query(&mut self, query: &str, rows: &[Row]) -> bool {
        if self.is_over() {
            return self.mission_complete();
        }
        self.queries_run += 1;

        let solved = self.mission.is_solved_by(query, rows);
        debug!(
            "Mission {} check for {query:?} over {} rows: {solved}",
            self.mission.number(),
            rows.len()
        );
        self.state = if solved {
            GameState::MissionComplete
        } else {
            GameState::Browsing
        };
        solved
    }

    /// Ends the session at the player's request.
    pub fn quit(&mut self) {
        if !self.is_over() {
            self.state = GameState::Quit;
        }
    }

    /// Ends the session because of an interrupt signal.
    pub fn interrupt(&mut self) {
        if !self.is_over() {
            self.state = GameState::Interrupted;
        }
    }
}
