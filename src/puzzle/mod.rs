//! The Alphabet Buttons rule engine
//!
//! Data flows one way: [`generate`] produces the letter and color
//! assignments, [`Solution::evaluate`] derives the correct letters from them
//! and the bomb facts, and [`PressState`] checks presses against the solution.
//! [`Puzzle`] ties the three together for one module instance.

mod assignment;
pub mod command;
mod engine;
mod press;
pub mod rules;
mod solution;

pub use assignment::{AssignmentError, ColorAssignment, LetterAssignment, generate};
pub use command::PressCommand;
pub use engine::{ModuleId, ModuleIdAllocator, PressEvent, Puzzle};
pub use press::{Outcome, Phase, PressState};
pub use solution::{RuleVerdict, Solution};
