//! Alphabet Buttons
//!
//! A bomb-defusal puzzle module: 26 letter buttons in shuffled positions and
//! seven colors, a rulebook of 26 predicates over the board and the bomb, and
//! a press state machine that solves once every correct button is pressed.
//!
//! # Quick Start
//!
//! ```rust
//! use alphabet_buttons::facts::{BombFacts, SerialNumber};
//! use alphabet_buttons::puzzle::{ModuleId, Puzzle};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let facts = BombFacts::new(SerialNumber::new("AB1CD7").unwrap()).with_batteries(3, 2);
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut puzzle = Puzzle::new(ModuleId::new(1), &mut rng, &facts);
//!
//! let correct: Vec<_> = puzzle.solution().letters().collect();
//! for letter in correct {
//!     puzzle.press_label(letter);
//! }
//! assert!(puzzle.is_solved());
//! ```

// Core domain types
pub mod core;

// Bomb facts: serial number, batteries, indicators, ports
pub mod facts;

// Rules, solution and press state machine
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
