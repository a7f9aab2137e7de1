//! Button colors
//!
//! Seven pastel button colors. Their index order (0-6) is significant: several
//! rules compare a button's color index against constants.

use std::fmt;

/// Number of distinct button colors
pub const COLOR_COUNT: usize = 7;

/// A button color, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ButtonColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl ButtonColor {
    /// All colors in index order
    pub const ALL: [Self; COLOR_COUNT] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Magenta,
    ];

    /// Color for an index in `0..7`
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < COLOR_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Index of this color (Red = 0, Magenta = 6)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-letter colorblind label (R, O, Y, G, C, B, M)
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Cyan => 'C',
            Self::Blue => 'B',
            Self::Magenta => 'M',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }

    /// Pastel RGB used by the terminal front-ends
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 128, 128),
            Self::Orange => (255, 191, 128),
            Self::Yellow => (255, 255, 128),
            Self::Green => (128, 255, 128),
            Self::Cyan => (128, 255, 255),
            Self::Blue => (128, 128, 255),
            Self::Magenta => (255, 128, 255),
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
