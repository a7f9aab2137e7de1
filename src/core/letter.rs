//! Button labels
//!
//! A `Letter` is one of the 26 uppercase labels A-Z, stored as its alphabet index.

use std::fmt;

/// Number of letters, and therefore of buttons, on the module
pub const LETTER_COUNT: usize = 26;

/// One of the labels A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for invalid labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    OutOfRange(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(index) => {
                write!(f, "Letter index must be below {LETTER_COUNT}, got {index}")
            }
            Self::NotAlphabetic(ch) => write!(f, "'{ch}' is not an ASCII letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// All letters in alphabetical order
    pub const ALL: [Self; LETTER_COUNT] = {
        let mut all = [Self(0); LETTER_COUNT];
        let mut i = 0;
        while i < LETTER_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const G: Self = Self(6);
    pub const J: Self = Self(9);
    pub const M: Self = Self(12);
    pub const N: Self = Self(13);
    pub const O: Self = Self(14);
    pub const P: Self = Self(15);
    pub const Q: Self = Self(16);
    pub const R: Self = Self(17);
    pub const S: Self = Self(18);
    pub const T: Self = Self(19);
    pub const U: Self = Self(20);
    pub const V: Self = Self(21);
    pub const W: Self = Self(22);
    pub const Y: Self = Self(24);
    pub const Z: Self = Self(25);

    /// Create a letter from its alphabet index (A = 0)
    ///
    /// # Errors
    /// Returns `LetterError::OutOfRange` if `index >= 26`.
    pub const fn from_index(index: usize) -> Result<Self, LetterError> {
        if index < LETTER_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(LetterError::OutOfRange(index))
        }
    }

    /// Create a letter from a character, ignoring case
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything but `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use alphabet_buttons::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').unwrap().to_char(), 'Q');
    /// assert!(Letter::from_char('7').is_err());
    /// ```
    pub const fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Alphabet index (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_letters_in_order() {
        let text: String = Letter::ALL.iter().map(|l| l.to_char()).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn from_char_ignores_case() {
        assert_eq!(Letter::from_char('a').unwrap(), Letter::A);
        assert_eq!(Letter::from_char('Z').unwrap(), Letter::Z);
        assert_eq!(Letter::from_char('m').unwrap().index(), 12);
    }

    #[test]
    fn from_char_rejects_non_letters() {
        assert_eq!(Letter::from_char('3'), Err(LetterError::NotAlphabetic('3')));
        assert!(Letter::from_char(' ').is_err());
        assert!(Letter::from_char('é').is_err());
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Letter::from_index(0).unwrap(), Letter::A);
        assert_eq!(Letter::from_index(25).unwrap(), Letter::Z);
        assert_eq!(Letter::from_index(26), Err(LetterError::OutOfRange(26)));
    }

    #[test]
    fn named_constants_match_characters() {
        for (letter, ch) in [
            (Letter::G, 'G'),
            (Letter::J, 'J'),
            (Letter::Q, 'Q'),
            (Letter::W, 'W'),
            (Letter::Y, 'Y'),
        ] {
            assert_eq!(letter.to_char(), ch);
        }
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::N), "N");
    }
}
