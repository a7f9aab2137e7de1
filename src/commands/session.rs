//! Puzzle session shared by the interactive front-ends
//!
//! A session plays the host: it owns the bomb facts, hands out module ids,
//! counts strikes and builds a new puzzle on demand. Everything random flows
//! from one seeded generator so a run can be replayed from its seed.

use crate::core::Letter;
use crate::facts::{BombFacts, generator::random_bomb, loader::load_from_file};
use crate::puzzle::{ModuleIdAllocator, PressCommand, PressEvent, Puzzle};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where bomb facts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactsSource {
    /// A new random bomb for every puzzle
    Random,
    /// The same bomb, loaded from a JSON file
    File(PathBuf),
}

impl FactsSource {
    /// `random` or a path to a facts file
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "random" => Self::Random,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for starting a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
    pub facts: FactsSource,
    pub first_id: u32,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(seed: u64, facts: FactsSource) -> Self {
        Self {
            seed,
            facts,
            first_id: 1,
        }
    }
}

/// A running host with one active puzzle
pub struct Session {
    seed: u64,
    source: FactsSource,
    rng: StdRng,
    ids: ModuleIdAllocator,
    facts: BombFacts,
    puzzle: Puzzle,
    strikes: usize,
}

impl Session {
    /// Start a session and build its first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the facts file cannot be loaded.
    pub fn start(config: SessionConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut ids = ModuleIdAllocator::starting_at(config.first_id);

        let facts = match &config.facts {
            FactsSource::Random => random_bomb(&mut rng),
            FactsSource::File(path) => load_from_file(path)?,
        };
        let puzzle = Puzzle::new(ids.allocate(), &mut rng, &facts);

        log::debug!(
            "Session started with seed {} and serial {}",
            config.seed,
            facts.serial_number
        );

        Ok(Self {
            seed: config.seed,
            source: config.facts,
            rng,
            ids,
            facts,
            puzzle,
            strikes: 0,
        })
    }

    /// Replace the puzzle with a fresh one (and a fresh bomb for random facts)
    pub fn new_puzzle(&mut self) {
        if self.source == FactsSource::Random {
            self.facts = random_bomb(&mut self.rng);
        }
        self.puzzle = Puzzle::new(self.ids.allocate(), &mut self.rng, &self.facts);
        self.strikes = 0;
    }

    /// Press the button showing a letter, counting strikes
    pub fn press_label(&mut self, letter: Letter) -> PressEvent {
        let event = self.puzzle.press_label(letter);
        self.record(&event);
        event
    }

    /// Run a text command, counting strikes
    pub fn run_command(&mut self, command: &PressCommand) -> Vec<PressEvent> {
        let events = self.puzzle.run_command(command);
        for event in &events {
            self.record(event);
        }
        events
    }

    fn record(&mut self, event: &PressEvent) {
        if event.outcome.is_strike() {
            self.strikes += 1;
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn facts(&self) -> &BombFacts {
        &self.facts
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn strikes(&self) -> usize {
        self.strikes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::ModuleId;

    #[test]
    fn facts_source_from_arg() {
        assert_eq!(FactsSource::from_arg("random"), FactsSource::Random);
        assert_eq!(
            FactsSource::from_arg("bombs/a.json"),
            FactsSource::File(PathBuf::from("bombs/a.json"))
        );
    }

    #[test]
    fn same_seed_same_session() {
        let a = Session::start(SessionConfig::new(17, FactsSource::Random)).unwrap();
        let b = Session::start(SessionConfig::new(17, FactsSource::Random)).unwrap();

        assert_eq!(a.facts(), b.facts());
        assert_eq!(a.puzzle().letters(), b.puzzle().letters());
        assert_eq!(a.puzzle().solution(), b.puzzle().solution());
    }

    #[test]
    fn new_puzzle_allocates_next_id() {
        let mut session = Session::start(SessionConfig::new(1, FactsSource::Random)).unwrap();
        assert_eq!(session.puzzle().id(), ModuleId::new(1));

        session.new_puzzle();
        assert_eq!(session.puzzle().id(), ModuleId::new(2));
        assert_eq!(session.strikes(), 0);
    }

    #[test]
    fn wrong_presses_count_strikes() {
        let mut session = Session::start(SessionConfig::new(9, FactsSource::Random)).unwrap();
        let wrong: Vec<_> = Letter::ALL
            .into_iter()
            .filter(|&l| !session.puzzle().solution().is_correct(l))
            .take(2)
            .collect();

        for letter in &wrong {
            session.press_label(*letter);
        }
        assert_eq!(session.strikes(), wrong.len());
    }

    #[test]
    fn missing_facts_file_fails() {
        let config = SessionConfig::new(1, FactsSource::File(PathBuf::from("/no/such.json")));
        assert!(Session::start(config).is_err());
    }
}
