//! Solution derivation
//!
//! Evaluates every rule once and freezes the result. When no rule holds, the
//! first letter of the serial number becomes the single correct button, so a
//! solution is never empty.

use super::rules::{RULES, RuleInputs};
use super::{ColorAssignment, LetterAssignment};
use crate::core::{LETTER_COUNT, Letter};
use crate::facts::BombInfo;

/// Which letters must be pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    correct: [bool; LETTER_COUNT],
    fallback: Option<Letter>,
}

/// One rule's verdict, for explaining a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    pub letter: Letter,
    pub description: &'static str,
    pub holds: bool,
}

impl Solution {
    /// Derive the solution for a puzzle
    ///
    /// # Examples
    /// ```
    /// use alphabet_buttons::core::{ButtonColor, Letter};
    /// use alphabet_buttons::facts::{BombFacts, SerialNumber};
    /// use alphabet_buttons::puzzle::{ColorAssignment, LetterAssignment, Solution};
    ///
    /// let facts = BombFacts::new(SerialNumber::new("XN4AB7").unwrap());
    /// let letters = LetterAssignment::from_order("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    /// let colors = ColorAssignment::uniform(ButtonColor::Green)
    ///     .with_color(Letter::G, ButtonColor::Cyan)
    ///     .with_color(Letter::V, ButtonColor::Cyan);
    ///
    /// let solution = Solution::evaluate(&letters, &colors, &facts);
    /// // Only N holds: the serial number contains an N
    /// assert_eq!(solution.letters().collect::<Vec<_>>(), vec![Letter::N]);
    /// ```
    #[must_use]
    pub fn evaluate(
        letters: &LetterAssignment,
        colors: &ColorAssignment,
        facts: &dyn BombInfo,
    ) -> Self {
        let inputs = RuleInputs {
            letters,
            colors,
            facts,
        };

        let mut correct = [false; LETTER_COUNT];
        for (entry, rule) in correct.iter_mut().zip(&RULES) {
            *entry = rule.holds(&inputs);
        }

        let mut fallback = None;
        if !correct.contains(&true) {
            let letter = facts.serial_number().first_letter();
            correct[letter.index()] = true;
            fallback = Some(letter);
        }

        Self { correct, fallback }
    }

    /// Every rule with its verdict, A first
    #[must_use]
    pub fn explain(
        letters: &LetterAssignment,
        colors: &ColorAssignment,
        facts: &dyn BombInfo,
    ) -> Vec<RuleVerdict> {
        let inputs = RuleInputs {
            letters,
            colors,
            facts,
        };

        Letter::ALL
            .iter()
            .zip(&RULES)
            .map(|(&letter, rule)| RuleVerdict {
                letter,
                description: rule.description,
                holds: rule.holds(&inputs),
            })
            .collect()
    }

    /// Whether pressing the button bearing `letter` is correct
    #[inline]
    #[must_use]
    pub const fn is_correct(&self, letter: Letter) -> bool {
        self.correct[letter.index()]
    }

    /// Number of letters that must be pressed (always at least one)
    #[must_use]
    pub fn count(&self) -> usize {
        self.correct.iter().filter(|&&c| c).count()
    }

    /// Correct letters in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL
            .into_iter()
            .filter(|letter| self.is_correct(*letter))
    }

    /// The serial letter forced in when no rule held
    #[must_use]
    pub const fn fallback(&self) -> Option<Letter> {
        self.fallback
    }

    /// Correct letters joined as `A, F, W`
    #[must_use]
    pub fn describe(&self) -> String {
        self.letters()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
