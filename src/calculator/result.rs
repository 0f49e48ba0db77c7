//! Per-option calculation results

use super::distribution::Percentiles;
use crate::core::ConfidenceLevel;
use crate::crafting::CraftingOption;

/// Outcome of repeatedly applying one crafting option to reach a target
///
/// Only produced for options that can succeed (`success_probability > 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaticResult {
    /// Crafting option name, e.g. `"bench 2R"`
    pub option_label: String,
    /// Sockets locked by the option, R/G/B
    pub fixed: [u8; 3],
    /// Chance that a single attempt produces the target colors
    pub success_probability: f64,
    /// Currency spent per attempt
    pub cost_per_try: u32,
    /// Attempts needed per confidence level
    pub percentiles: Percentiles,
    /// Expected attempts until success (1/p)
    pub mean_attempts: f64,
    /// Standard deviation of the attempt count (sqrt(1-p)/p)
    pub std_dev_attempts: f64,
    /// Expected currency spent until success (cost/p)
    pub expected_cost: f64,
}

impl ChromaticResult {
    /// Build the result for an option with a nonzero success chance
    #[must_use]
    pub fn new(option: &CraftingOption, success_probability: f64) -> Self {
        debug_assert!(success_probability > 0.0, "infeasible options have no result");

        let p = success_probability.min(1.0);
        let cost = f64::from(option.cost());

        Self {
            option_label: option.label().to_string(),
            fixed: option.fixed(),
            success_probability,
            cost_per_try: option.cost(),
            percentiles: Percentiles::from_probability(p),
            mean_attempts: 1.0 / p,
            std_dev_attempts: (1.0 - p).sqrt() / p,
            expected_cost: cost / p,
        }
    }

    /// Attempts needed at `level`
    #[inline]
    #[must_use]
    pub const fn attempts_at(&self, level: ConfidenceLevel) -> u64 {
        self.percentiles.get(level)
    }

    /// Currency needed to succeed with confidence `level`
    #[must_use]
    pub fn cost_at(&self, level: ConfidenceLevel) -> u64 {
        self.attempts_at(level)
            .saturating_mul(u64::from(self.cost_per_try))
    }
}
