//! Button press state machine
//!
//! Tracks which slots have been pressed correctly. A press of a correct letter
//! marks its slot; the puzzle is solved once every correct letter's slot is
//! marked. Wrong presses never touch the state: strikes are the caller's
//! business.

use super::{LetterAssignment, Solution};
use crate::core::{LETTER_COUNT, Slot};

/// Result of a single press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Correct button, puzzle not (newly) solved
    Correct,
    /// Correct button and it was the last one missing
    CorrectAndSolved,
    /// Wrong button: the caller should record a strike
    Incorrect,
}

impl Outcome {
    #[must_use]
    pub const fn is_strike(self) -> bool {
        matches!(self, Self::Incorrect)
    }
}

/// Lifecycle of a puzzle's presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    InProgress,
    Solved,
}

/// Which slots have been pressed correctly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressState {
    pressed: [bool; LETTER_COUNT],
    pressed_count: usize,
    phase: Phase,
}

impl Default for PressState {
    fn default() -> Self {
        Self::new()
    }
}

impl PressState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pressed: [false; LETTER_COUNT],
            pressed_count: 0,
            phase: Phase::Idle,
        }
    }

    /// Apply one press
    ///
    /// Re-pressing a slot that is already marked reports `Correct` again
    /// without counting twice, and never re-reports `CorrectAndSolved`.
    pub fn press(
        &mut self,
        slot: Slot,
        letters: &LetterAssignment,
        solution: &Solution,
    ) -> Outcome {
        let letter = letters.letter_at(slot);
        if !solution.is_correct(letter) {
            return Outcome::Incorrect;
        }

        let entry = &mut self.pressed[slot.position()];
        if *entry {
            return Outcome::Correct;
        }
        *entry = true;
        self.pressed_count += 1;

        if self.pressed_count == solution.count() {
            self.phase = Phase::Solved;
            Outcome::CorrectAndSolved
        } else {
            self.phase = Phase::InProgress;
            Outcome::Correct
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_pressed(&self, slot: Slot) -> bool {
        self.pressed[slot.position()]
    }

    /// Number of distinct slots pressed correctly
    #[inline]
    #[must_use]
    pub const fn pressed_count(&self) -> usize {
        self.pressed_count
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }
}
