//! Confidence levels used for attempt-count percentiles

use super::ChromaError;
use std::fmt;

/// A supported confidence level
///
/// "Cost at 90%" means the player hits the target colors within that budget
/// with at least 90% probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    P50,
    #[default]
    P66,
    P80,
    P90,
    P95,
    P99,
}

impl ConfidenceLevel {
    /// Every level, lowest first
    pub const ALL: [Self; 6] = [
        Self::P50,
        Self::P66,
        Self::P80,
        Self::P90,
        Self::P95,
        Self::P99,
    ];

    /// Position in [`ConfidenceLevel::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Level as a whole percentage
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::P50 => 50,
            Self::P66 => 66,
            Self::P80 => 80,
            Self::P90 => 90,
            Self::P95 => 95,
            Self::P99 => 99,
        }
    }

    /// Level as a probability in (0, 1)
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }
}

impl TryFrom<u8> for ConfidenceLevel {
    type Error = ChromaError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or(ChromaError::InvalidConfidenceLevel(percent))
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
