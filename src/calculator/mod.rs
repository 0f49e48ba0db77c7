//! Chance calculator
//!
//! Combines color chances with the crafting catalog to estimate how many
//! attempts, and how much currency, a target color combination costs.

mod distribution;
mod engine;
mod result;

pub use distribution::{
    Percentiles, attempts_for_confidence, geometric_cdf, multinomial_pmf,
};
pub use engine::{ChromaticCalculator, compute_chromatic_options};
pub use result::ChromaticResult;
