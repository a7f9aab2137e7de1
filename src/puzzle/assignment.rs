//! Letter and color assignments
//!
//! Each puzzle shuffles the 26 labels onto the 26 slots and paints every
//! button one of seven colors. Both assignments are fixed for the lifetime of
//! the puzzle.

use crate::core::{ButtonColor, COLOR_COUNT, LETTER_COUNT, Letter, Slot};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Bijection between slots and the letters shown on them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterAssignment {
    letters: [Letter; LETTER_COUNT],
    slots: [Slot; LETTER_COUNT],
}

/// The color of the button bearing each letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: [ButtonColor; LETTER_COUNT],
}

/// Error type for explicitly constructed assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    WrongCount(usize),
    DuplicateLetter(Letter),
    InvalidLetter(char),
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(count) => {
                write!(f, "Expected {LETTER_COUNT} entries, got {count}")
            }
            Self::DuplicateLetter(letter) => write!(f, "Letter {letter} appears more than once"),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for AssignmentError {}

/// Generate a fresh pair of assignments
///
/// Letters are a uniform shuffle of A-Z; colors are one independent uniform
/// draw per letter, in alphabetical order.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> (LetterAssignment, ColorAssignment) {
    let letters = LetterAssignment::shuffled(rng);
    let colors = ColorAssignment::random(rng);
    (letters, colors)
}

impl LetterAssignment {
    /// A uniformly random assignment
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = Letter::ALL;
        letters.shuffle(rng);
        Self::from_letters_unchecked(letters)
    }

    /// Slot `i` shows the `i`-th letter of the alphabet
    #[must_use]
    pub fn identity() -> Self {
        Self::from_letters_unchecked(Letter::ALL)
    }

    /// Build an assignment from the labels in slot order, e.g. `"QWERTY..."`
    ///
    /// # Errors
    /// Returns `AssignmentError` unless `order` holds each of A-Z exactly once.
    ///
    /// # Examples
    /// ```
    /// use alphabet_buttons::core::{Letter, Slot};
    /// use alphabet_buttons::puzzle::LetterAssignment;
    ///
    /// let letters = LetterAssignment::from_order("ZYXWVUTSRQPONMLKJIHGFEDCBA").unwrap();
    /// assert_eq!(letters.letter_at(Slot::new(0).unwrap()), Letter::Z);
    /// assert!(LetterAssignment::from_order("ABC").is_err());
    /// ```
    pub fn from_order(order: &str) -> Result<Self, AssignmentError> {
        let parsed = order
            .chars()
            .map(|ch| Letter::from_char(ch).map_err(|_| AssignmentError::InvalidLetter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        let letters: [Letter; LETTER_COUNT] = parsed
            .as_slice()
            .try_into()
            .map_err(|_| AssignmentError::WrongCount(parsed.len()))?;

        let mut seen = [false; LETTER_COUNT];
        for letter in letters {
            if seen[letter.index()] {
                return Err(AssignmentError::DuplicateLetter(letter));
            }
            seen[letter.index()] = true;
        }

        Ok(Self::from_letters_unchecked(letters))
    }

    /// Caller guarantees `letters` is a permutation of A-Z
    fn from_letters_unchecked(letters: [Letter; LETTER_COUNT]) -> Self {
        let mut slots = Slot::ALL;
        for (slot, letter) in Slot::ALL.into_iter().zip(letters) {
            slots[letter.index()] = slot;
        }
        Self { letters, slots }
    }

    /// Letter shown on a slot
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, slot: Slot) -> Letter {
        self.letters[slot.position()]
    }

    /// Slot showing a letter
    #[inline]
    #[must_use]
    pub const fn slot_of(&self, letter: Letter) -> Slot {
        self.slots[letter.index()]
    }

    /// Letters in slot order
    #[must_use]
    pub const fn letters(&self) -> &[Letter; LETTER_COUNT] {
        &self.letters
    }
}

impl fmt::Display for LetterAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl ColorAssignment {
    /// One uniform color per letter
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colors = Letter::ALL.map(|_| ButtonColor::ALL[rng.random_range(0..COLOR_COUNT)]);
        Self { colors }
    }

    /// Every letter gets the same color
    #[must_use]
    pub const fn uniform(color: ButtonColor) -> Self {
        Self {
            colors: [color; LETTER_COUNT],
        }
    }

    /// Colors listed per letter, A first
    #[must_use]
    pub const fn from_colors(colors: [ButtonColor; LETTER_COUNT]) -> Self {
        Self { colors }
    }

    /// Copy with one letter repainted
    #[must_use]
    pub const fn with_color(mut self, letter: Letter, color: ButtonColor) -> Self {
        self.colors[letter.index()] = color;
        self
    }

    #[inline]
    #[must_use]
    pub const fn color_of(&self, letter: Letter) -> ButtonColor {
        self.colors[letter.index()]
    }

    /// Color index (0-6) of the button bearing `letter`
    #[inline]
    #[must_use]
    pub const fn index_of(&self, letter: Letter) -> u8 {
        self.color_of(letter).index()
    }
}
