//! Bomb serial numbers
//!
//! The serial number is validated once on construction so that every rule that
//! reads it (last digit, first letter, character positions) is total.

use crate::core::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum serial number length
pub const SERIAL_MIN_LEN: usize = 5;
/// Maximum serial number length
pub const SERIAL_MAX_LEN: usize = 6;

/// A validated, uppercase bomb serial number
///
/// Holds 5-6 ASCII alphanumerics with at least one letter and one digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber {
    text: String,
    last_digit: u8,
    first_letter: Letter,
}

/// Error type for invalid serial numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    InvalidLength(usize),
    InvalidCharacter(char),
    MissingDigit,
    MissingLetter,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Serial number must be {SERIAL_MIN_LEN}-{SERIAL_MAX_LEN} characters, got {len}"
            ),
            Self::InvalidCharacter(ch) => {
                write!(f, "Serial number contains invalid character '{ch}'")
            }
            Self::MissingDigit => write!(f, "Serial number must contain at least one digit"),
            Self::MissingLetter => write!(f, "Serial number must contain at least one letter"),
        }
    }
}

impl std::error::Error for SerialError {}

impl SerialNumber {
    /// Parse and validate a serial number, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `SerialError` if:
    /// - Length is not 5 or 6 characters
    /// - Contains anything but ASCII letters and digits
    /// - Has no digit or no letter
    ///
    /// # Examples
    /// ```
    /// use alphabet_buttons::facts::SerialNumber;
    ///
    /// let serial = SerialNumber::new("ab3cd9").unwrap();
    /// assert_eq!(serial.as_str(), "AB3CD9");
    /// assert_eq!(serial.last_digit(), 9);
    /// assert_eq!(serial.first_letter().to_char(), 'A');
    ///
    /// assert!(SerialNumber::new("ABCDEF").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SerialError> {
        let text: String = text.into().to_ascii_uppercase();

        let len = text.chars().count();
        if !(SERIAL_MIN_LEN..=SERIAL_MAX_LEN).contains(&len) {
            return Err(SerialError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(SerialError::InvalidCharacter(bad));
        }

        let last_digit = text
            .bytes()
            .rev()
            .find(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .ok_or(SerialError::MissingDigit)?;

        let first_letter = text
            .chars()
            .find_map(|c| Letter::from_char(c).ok())
            .ok_or(SerialError::MissingLetter)?;

        Ok(Self {
            text,
            last_digit,
            first_letter,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The last digit appearing anywhere in the serial number
    #[inline]
    #[must_use]
    pub const fn last_digit(&self) -> u8 {
        self.last_digit
    }

    /// The first letter appearing in the serial number
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> Letter {
        self.first_letter
    }

    /// Character at a 0-indexed position, if the serial number is long enough
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.text.as_bytes().get(position).map(|&b| b as char)
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.text.contains(ch)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = SerialError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<SerialNumber> for String {
    fn from(serial: SerialNumber) -> Self {
        serial.text
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
