//! Chromatic cost calculator
//!
//! Evaluates every crafting option against a target color combination and
//! ranks the feasible ones by cost at a chosen confidence level.

use super::distribution::multinomial_pmf;
use super::result::ChromaticResult;
use crate::chances::{ColorProbabilities, compute_color_chances};
use crate::core::{Color, ColorTarget, ConfidenceLevel, ItemDescriptor};
use crate::crafting::{CraftingOption, crafting_options};
use rayon::prelude::*;

/// Calculator for one item and one target
///
/// Holds only immutable inputs, so repeated calls give identical results.
#[derive(Debug, Clone, Copy)]
pub struct ChromaticCalculator {
    chances: ColorProbabilities,
    sockets: u8,
    target: ColorTarget,
}

impl ChromaticCalculator {
    /// Create a calculator for `item`, deriving its color chances
    #[must_use]
    pub fn new(item: &ItemDescriptor, target: ColorTarget) -> Self {
        Self::with_chances(compute_color_chances(item), item.socket_count(), target)
    }

    /// Create a calculator from precomputed chances
    #[must_use]
    pub const fn with_chances(chances: ColorProbabilities, sockets: u8, target: ColorTarget) -> Self {
        Self {
            chances,
            sockets,
            target,
        }
    }

    #[inline]
    #[must_use]
    pub const fn chances(&self) -> &ColorProbabilities {
        &self.chances
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> ColorTarget {
        self.target
    }

    /// Chance that a single application of `option` yields the target
    ///
    /// Returns 0 when the option locks more sockets than the item has, or
    /// locks more of a color than the target asks for.
    #[must_use]
    pub fn success_probability(&self, option: &CraftingOption) -> f64 {
        let locked = option.fixed_total();
        if locked > self.sockets {
            return 0.0;
        }

        let mut remaining = [0u32; 3];
        for color in Color::ALL {
            let wanted = self.target.get(color);
            let fixed = option.fixed_for(color);
            let Some(left) = wanted.checked_sub(fixed) else {
                return 0.0;
            };
            remaining[color.index()] = u32::from(left);
        }

        let free_sockets = u32::from(self.sockets - locked);
        multinomial_pmf(remaining, free_sockets, self.chances.as_array())
    }

    /// Evaluate one option, or `None` if it can never reach the target
    #[must_use]
    pub fn evaluate(&self, option: &CraftingOption) -> Option<ChromaticResult> {
        let probability = self.success_probability(option);
        tracing::debug!(
            option = option.label(),
            probability,
            "evaluated crafting option"
        );

        (probability > 0.0).then(|| ChromaticResult::new(option, probability))
    }

    /// Evaluate `options`, drop infeasible ones and sort by cost at `sort_by`
    ///
    /// Ties keep the order of `options`.
    #[must_use]
    pub fn rank(&self, options: &[CraftingOption], sort_by: ConfidenceLevel) -> Vec<ChromaticResult> {
        let mut results: Vec<ChromaticResult> = options
            .par_iter()
            .filter_map(|option| self.evaluate(option))
            .collect();

        results.sort_by_key(|result| result.cost_at(sort_by));
        results
    }
}

/// Rank every bench option for reaching `target` on `item`
///
/// # Examples
/// ```
/// use chromatic_calc::calculator::compute_chromatic_options;
/// use chromatic_calc::core::{AttributeRequirements, ColorTarget, ConfidenceLevel, ItemDescriptor};
///
/// let item = ItemDescriptor::new(6, AttributeRequirements::default()).unwrap();
/// let results = compute_chromatic_options(&item, ColorTarget::new(2, 2, 2), ConfidenceLevel::P66);
///
/// let chromatic = results.iter().find(|r| r.option_label == "chromatic").unwrap();
/// assert!((chromatic.success_probability - 90.0 / 729.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn compute_chromatic_options(
    item: &ItemDescriptor,
    target: ColorTarget,
    sort_by: ConfidenceLevel,
) -> Vec<ChromaticResult> {
    ChromaticCalculator::new(item, target).rank(crafting_options(), sort_by)
}
