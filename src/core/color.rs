//! Socket colors and the attributes they belong to
//!
//! Each color is tied to exactly one attribute:
//! - Red = Strength (`str`)
//! - Green = Dexterity (`dex`)
//! - Blue = Intelligence (`int`)

use std::fmt;

/// A socket color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors in canonical R, G, B order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Stable index (0 = R, 1 = G, 2 = B) used for array-backed storage
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Short name of the attribute this color belongs to
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Red => "str",
            Self::Green => "dex",
            Self::Blue => "int",
        }
    }

    /// Single uppercase letter used in labels and target strings
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
        }
    }

    /// Parse a color letter (case-insensitive)
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' | 'r' => Some(Self::Red),
            'G' | 'g' => Some(Self::Green),
            'B' | 'b' => Some(Self::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
