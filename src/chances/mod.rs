//! Color chance model
//!
//! Turns an item's attribute requirements into per-socket color probabilities.

mod model;

pub use model::{
    ChanceModel, ColorProbabilities, compute_color_chances, dual_requirement_on_chance,
    single_requirement_on_chance,
};
