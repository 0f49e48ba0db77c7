//! Chromatic Calculator
//!
//! Closed-form estimates of how much currency it takes to re-roll an item's
//! socket colors into a target combination. Socket colors follow a multinomial
//! distribution, and repeated attempts follow a geometric one, so every number
//! here is exact rather than simulated.
//!
//! # Quick Start
//!
//! ```rust
//! use chromatic_calc::calculator::compute_chromatic_options;
//! use chromatic_calc::core::{AttributeRequirements, ColorTarget, ConfidenceLevel, ItemDescriptor};
//!
//! // A six-socket body armour requiring only intelligence
//! let item = ItemDescriptor::new(6, AttributeRequirements::new(0, 0, 155)).unwrap();
//! let target: ColorTarget = "1R1G4B".parse().unwrap();
//!
//! let ranked = compute_chromatic_options(&item, target, ConfidenceLevel::default());
//! for result in &ranked {
//!     println!("{}: {:.4}", result.option_label, result.success_probability);
//! }
//! ```

// Core domain types
pub mod core;

// Per-socket color probabilities
pub mod chances;

// Crafting bench catalog
pub mod crafting;

// Multinomial/geometric cost calculation
pub mod calculator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use calculator::compute_chromatic_options;
pub use chances::compute_color_chances;
