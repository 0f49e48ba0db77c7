//! Core domain types for socket coloring
//!
//! Plain value types with validation at construction. Nothing here computes
//! probabilities; see [`crate::chances`] and [`crate::calculator`].

mod color;
mod confidence;
mod error;
mod item;
mod target;

pub use color::Color;
pub use confidence::ConfidenceLevel;
pub use error::ChromaError;
pub use item::{AttributeRequirements, ItemDescriptor, MAX_SOCKETS};
pub use target::ColorTarget;
