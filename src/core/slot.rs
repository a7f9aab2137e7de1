//! Button positions

use super::letter::LETTER_COUNT;
use std::fmt;

/// One of the 26 fixed button positions, numbered 0-25 in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// All slots in reading order
    pub const ALL: [Self; LETTER_COUNT] = {
        let mut all = [Self(0); LETTER_COUNT];
        let mut i = 0;
        while i < LETTER_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Slot for a position, or `None` when `position >= 26`
    #[must_use]
    pub const fn new(position: usize) -> Option<Self> {
        if position < LETTER_COUNT {
            Some(Self(position as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}
