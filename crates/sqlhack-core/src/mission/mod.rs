//! Missions: briefings, success narration and graders.
//!
//! Each mission is a [`Mission`] variant. Adding a mission means adding a
//! variant and its arms below; nothing is looked up by number.

use std::fmt;

use crate::models::Row;

pub mod grader;

pub use grader::{Grader, SubstringGrader};

/// Briefing text shown above the tool menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Briefing {
    pub title: &'static str,
    pub objective: &'static str,
    pub details: &'static [&'static str],
    pub hint: &'static str,
}

static NIGHT_SHIFT_GRADER: SubstringGrader = SubstringGrader {
    query_any: &["01:00", "1:00", "shift", "time"],
    query_all: &["weakness"],
    row_all: &["Marcus Steel", "coffee addiction"],
};

/// A scripted objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission {
    /// Find the guard on duty at 1 AM and learn his weakness.
    NightShift,
}

impl Mission {
    /// Every mission, in play order.
    pub const ALL: [Mission; 1] = [Mission::NightShift];

    /// The first mission of a new game.
    pub fn first() -> Self {
        Mission::NightShift
    }

    /// One-based mission number shown in the header.
    pub fn number(&self) -> u32 {
        match self {
            Mission::NightShift => 1,
        }
    }

    pub fn briefing(&self) -> Briefing {
        match self {
            Mission::NightShift => Briefing {
                title: "OPERATION: NIGHT SHIFT",
                objective: "Find the security guard who will be on duty at 1 AM",
                details: &[
                    "Agent needs to infiltrate the facility at 1 AM",
                    "Identify which guard will be on patrol during that time",
                    "Find the guard's weakness for potential distraction",
                ],
                hint: "Check employee shifts and cross-reference with security logs",
            },
        }
    }

    /// The field agent's transmission once the mission is solved.
    pub fn success_transmission(&self) -> &'static [&'static str] {
        match self {
            Mission::NightShift => &[
                "Perfect! Marcus Steel is on duty at 1 AM.",
                "I'll create a coffee emergency to distract him.",
                "Infiltration window secured. Well done, hacker!",
            ],
        }
    }

    pub fn grader(&self) -> &'static dyn Grader {
        match self {
            Mission::NightShift => &NIGHT_SHIFT_GRADER,
        }
    }

    /// Check whether `query` and the rows it returned solve this mission.
    pub fn is_solved_by(&self, query: &str, rows: &[Row]) -> bool {
        self.grader().evaluate(query, rows)
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MISSION {}: {}", self.number(), self.briefing().title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Value;

    const SHIFT_QUERY: &str = "SELECT name, weakness FROM employees \
                               WHERE shift_start <= '01:00' AND shift_end >= '01:00'";

    fn row(values: &[&str]) -> Row {
        Row(values.iter().map(|v| Value::from(*v)).collect())
    }

    #[test]
    fn test_night_shift_solved() {
        let rows = [row(&["Marcus Steel", "coffee addiction"])];
        assert!(Mission::NightShift.is_solved_by(SHIFT_QUERY, &rows));
    }

    #[test]
    fn test_night_shift_wrong_employee() {
        let rows = [row(&["Sarah Chen", "fear of spiders"])];
        assert!(!Mission::NightShift.is_solved_by(SHIFT_QUERY, &rows));
    }

    #[test]
    fn test_night_shift_requires_weakness_keyword() {
        let rows = [row(&["Marcus Steel", "coffee addiction"])];
        let query = "SELECT * FROM employees WHERE shift_start = '22:00'";
        assert!(!Mission::NightShift.is_solved_by(query, &rows));
    }

    #[test]
    fn test_night_shift_requires_time_keyword() {
        let rows = [row(&["Marcus Steel", "coffee addiction"])];
        let query = "SELECT name, weakness FROM employees WHERE id = 1";
        assert!(!Mission::NightShift.is_solved_by(query, &rows));
    }

    #[test]
    fn test_night_shift_keywords_are_case_insensitive() {
        let rows = [row(&["Marcus Steel", "coffee addiction"])];
        let query = "SELECT NAME, WEAKNESS FROM EMPLOYEES WHERE SHIFT_END = '06:00'";
        assert!(Mission::NightShift.is_solved_by(query, &rows));
    }

    #[test]
    fn test_mission_display() {
        assert_eq!(
            Mission::first().to_string(),
            "MISSION 1: OPERATION: NIGHT SHIFT"
        );
        assert_eq!(Mission::ALL.len(), 1);
    }
}
