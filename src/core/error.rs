//! Input validation errors
//!
//! Everything past construction and parsing is infallible, so this is the
//! only error type the library exposes.

use thiserror::Error;

/// Error raised when caller input cannot describe a valid calculation
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromaError {
    /// Socket count is zero or larger than the item allows
    #[error("Socket count must be between 1 and {max}, got {count}")]
    InvalidSocketCount { count: u8, max: u8 },

    /// Item maximum is zero or above the game limit
    #[error("Max sockets must be between 1 and {limit}, got {0}", limit = super::MAX_SOCKETS)]
    InvalidMaxSockets(u8),

    /// Target color string could not be parsed
    #[error("Invalid target colors: {0}")]
    InvalidTarget(String),

    /// Confidence level is not one of the supported percentiles
    #[error("Unsupported confidence level {0}% (expected one of 50, 66, 80, 90, 95, 99)")]
    InvalidConfidenceLevel(u8),
}
