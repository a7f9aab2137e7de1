//! Puzzle solving command
//!
//! Builds one puzzle, reports its solution with every rule's verdict, and
//! optionally plays a press command against it.

use super::session::{Session, SessionConfig};
use crate::facts::BombFacts;
use crate::puzzle::{PressCommand, PressEvent, Puzzle, RuleVerdict, Solution};
use anyhow::{Result, bail};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub session: SessionConfig,
    /// Optional `press ...` command to run after solving
    pub press: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(session: SessionConfig) -> Self {
        Self {
            session,
            press: None,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub seed: u64,
    pub facts: BombFacts,
    pub puzzle: Puzzle,
    pub verdicts: Vec<RuleVerdict>,
    pub events: Vec<PressEvent>,
    pub strikes: usize,
}

/// Build the configured puzzle and derive its solution
///
/// # Errors
///
/// Returns an error if:
/// - The facts file cannot be loaded
/// - The press command is not of the form `press <label>...`
pub fn solve_puzzle(config: SolveConfig) -> Result<SolveResult> {
    let command = match config.press.as_deref() {
        Some(text) => match PressCommand::parse(text) {
            Some(command) => Some(command),
            None => bail!("Invalid press command '{text}', expected: press A B C"),
        },
        None => None,
    };

    let mut session = Session::start(config.session)?;

    let verdicts = {
        let puzzle = session.puzzle();
        Solution::explain(puzzle.letters(), puzzle.colors(), session.facts())
    };

    let events = command
        .map(|command| session.run_command(&command))
        .unwrap_or_default();

    Ok(SolveResult {
        seed: session.seed(),
        facts: session.facts().clone(),
        puzzle: session.puzzle().clone(),
        verdicts,
        events,
        strikes: session.strikes(),
    })
}
