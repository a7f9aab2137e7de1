//! Core domain types for Alphabet Buttons
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are small `Copy` values with validated ranges.

mod color;
mod letter;
mod slot;

pub use color::{ButtonColor, COLOR_COUNT};
pub use letter::{LETTER_COUNT, Letter, LetterError};
pub use slot::Slot;
