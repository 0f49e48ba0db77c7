//! Desired socket color counts
//!
//! Targets are written as count/letter pairs such as `"2R1G3B"`. Colors that
//! are not mentioned default to zero.

use super::{ChromaError, Color};
use std::fmt;
use std::str::FromStr;

/// Number of sockets of each color the player wants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorTarget {
    counts: [u8; 3],
}

impl ColorTarget {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            counts: [red, green, blue],
        }
    }

    /// Desired count for one color
    #[inline]
    #[must_use]
    pub const fn get(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    /// Counts in R, G, B order
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> [u8; 3] {
        self.counts
    }

    /// Total number of sockets the target describes
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }
}

impl FromStr for ColorTarget {
    type Err = ChromaError;

    /// Parse strings like `"2R2G2B"`, `"3r 1b"` or `"1G1G"` (repeats add up)
    ///
    /// # Examples
    /// ```
    /// use chromatic_calc::core::ColorTarget;
    ///
    /// let target: ColorTarget = "2R1B".parse().unwrap();
    /// assert_eq!(target, ColorTarget::new(2, 0, 1));
    ///
    /// assert!("".parse::<ColorTarget>().is_err());
    /// assert!("2X".parse::<ColorTarget>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ChromaError::InvalidTarget(format!("'{s}': {reason}"));

        let mut counts = [0u8; 3];
        let mut pending: Option<u8> = None;
        let mut parsed_any = false;

        for ch in s.chars() {
            if ch.is_whitespace() {
                if pending.is_some() {
                    return Err(invalid("count must be followed directly by a color"));
                }
                continue;
            }

            if let Some(digit) = ch.to_digit(10) {
                let next = pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit as u8))
                    .ok_or_else(|| invalid("count too large"))?;
                pending = Some(next);
                continue;
            }

            let color = Color::from_letter(ch)
                .ok_or_else(|| invalid(&format!("unexpected character '{ch}'")))?;
            let count = pending
                .take()
                .ok_or_else(|| invalid(&format!("missing count before '{ch}'")))?;

            let slot = &mut counts[color.index()];
            *slot = slot
                .checked_add(count)
                .ok_or_else(|| invalid("count too large"))?;
            parsed_any = true;
        }

        if pending.is_some() {
            return Err(invalid("trailing count without a color"));
        }
        if !parsed_any {
            return Err(invalid("expected pairs like 2R1G3B"));
        }

        Ok(Self { counts })
    }
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::ALL {
            write!(f, "{}{}", self.get(color), color.letter())?;
        }
        Ok(())
    }
}
