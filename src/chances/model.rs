//! Per-socket color probabilities derived from attribute requirements
//!
//! Each socket rolls its color independently. The weights depend on how many
//! attributes the item requires:
//! - none: uniform
//! - one: the on-color gets 0.9 × (R + 10) / (R + 20), the others split the rest
//! - two: the requirements share 0.9 proportionally, the third color gets 0.1

use crate::core::{Color, ItemDescriptor};

/// Fixed chance of the unrequired color on two-attribute items
const DUAL_OFF_COLOR_CHANCE: f64 = 0.1;

/// Share of the weight given to requirement colors
const ON_COLOR_WEIGHT: f64 = 0.9;

/// Which branch of the chance model produced a set of probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanceModel {
    /// No requirements: every color equally likely
    Unrestricted,
    /// One requirement, favouring its color
    SingleAttribute(Color),
    /// Two requirements, the larger one dominant
    DualAttribute { dominant: Color, secondary: Color },
    /// Three requirements. The game's weighting is unknown, uniform chances
    /// are used instead and the numbers are an approximation.
    TripleAttributeFallback,
}

impl ChanceModel {
    /// Whether the probabilities are a stand-in rather than the real weighting
    #[must_use]
    pub const fn is_approximation(self) -> bool {
        matches!(self, Self::TripleAttributeFallback)
    }
}

/// Probability of each color for a single socket
///
/// Values are stored by color identity and always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProbabilities {
    chances: [f64; 3],
    model: ChanceModel,
}

impl ColorProbabilities {
    /// Equal chance for every color
    #[must_use]
    pub const fn uniform(model: ChanceModel) -> Self {
        Self {
            chances: [1.0 / 3.0; 3],
            model,
        }
    }

    /// Probability of a socket rolling `color`
    #[inline]
    #[must_use]
    pub const fn get(&self, color: Color) -> f64 {
        self.chances[color.index()]
    }

    /// Probabilities in R, G, B order
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        self.chances
    }

    #[inline]
    #[must_use]
    pub const fn model(&self) -> ChanceModel {
        self.model
    }

    /// Iterate `(color, probability)` pairs in R, G, B order
    pub fn iter(&self) -> impl Iterator<Item = (Color, f64)> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.get(color)))
    }
}

/// On-color chance for an item with a single requirement `requirement`
#[must_use]
pub fn single_requirement_on_chance(requirement: u32) -> f64 {
    let r = f64::from(requirement);
    ON_COLOR_WEIGHT * (r + 10.0) / (r + 20.0)
}

/// Dominant color chance for two requirements where `dominant >= secondary`
#[must_use]
pub fn dual_requirement_on_chance(dominant: u32, secondary: u32) -> f64 {
    let hi = f64::from(dominant);
    let lo = f64::from(secondary);
    ON_COLOR_WEIGHT * hi / (hi + lo)
}

/// Compute per-socket color chances for an item
///
/// # Examples
/// ```
/// use chromatic_calc::chances::compute_color_chances;
/// use chromatic_calc::core::{AttributeRequirements, Color, ItemDescriptor};
///
/// let item = ItemDescriptor::new(6, AttributeRequirements::new(0, 0, 155)).unwrap();
/// let chances = compute_color_chances(&item);
///
/// assert!(chances.get(Color::Blue) > chances.get(Color::Red));
/// assert_eq!(chances.get(Color::Red), chances.get(Color::Green));
/// ```
#[must_use]
pub fn compute_color_chances(item: &ItemDescriptor) -> ColorProbabilities {
    // Ascending by value; ties broken by str < dex < int so the result is reproducible
    let mut sorted: Vec<(Color, u32)> = item.requirements().iter().collect();
    sorted.sort_by_key(|&(color, value)| (value, color.index()));

    let (hi_color, hi_value) = sorted[2];
    let (lo_color, lo_value) = sorted[1];
    let (off_color, _) = sorted[0];

    match item.required_attribute_count() {
        1 => {
            let on_chance = single_requirement_on_chance(hi_value);
            let off_chance = (1.0 - on_chance) / 2.0;

            let mut chances = [off_chance; 3];
            chances[hi_color.index()] = on_chance;

            ColorProbabilities {
                chances,
                model: ChanceModel::SingleAttribute(hi_color),
            }
        }
        2 => {
            let on_chance = dual_requirement_on_chance(hi_value, lo_value);

            let mut chances = [0.0; 3];
            chances[hi_color.index()] = on_chance;
            chances[lo_color.index()] = ON_COLOR_WEIGHT - on_chance;
            chances[off_color.index()] = DUAL_OFF_COLOR_CHANCE;

            ColorProbabilities {
                chances,
                model: ChanceModel::DualAttribute {
                    dominant: hi_color,
                    secondary: lo_color,
                },
            }
        }
        3 => {
            tracing::warn!(
                requirements = ?item.requirements(),
                "item requires all three attributes; using uniform color chances as an approximation"
            );
            ColorProbabilities::uniform(ChanceModel::TripleAttributeFallback)
        }
        _ => ColorProbabilities::uniform(ChanceModel::Unrestricted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeRequirements;

    const TOLERANCE: f64 = 1e-12;

    fn chances_for(str_req: u32, dex_req: u32, int_req: u32) -> ColorProbabilities {
        let item =
            ItemDescriptor::new(6, AttributeRequirements::new(str_req, dex_req, int_req)).unwrap();
        compute_color_chances(&item)
    }

    fn assert_sums_to_one(chances: &ColorProbabilities) {
        let total: f64 = chances.as_array().iter().sum();
        assert!((total - 1.0).abs() < TOLERANCE, "sum was {total}");
    }

    #[test]
    fn no_requirements_is_exactly_uniform() {
        let chances = chances_for(0, 0, 0);
        assert_eq!(chances.as_array(), [1.0 / 3.0; 3]);
        assert_eq!(chances.model(), ChanceModel::Unrestricted);
        assert!(!chances.model().is_approximation());
    }

    #[test]
    fn single_requirement_formula_at_zero() {
        let on = single_requirement_on_chance(0);
        let off = (1.0 - on) / 2.0;
        assert!((on - 0.45).abs() < TOLERANCE);
        assert!((off - 0.275).abs() < TOLERANCE);
        assert!((on + 2.0 * off - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn single_requirement_favours_its_color() {
        let chances = chances_for(0, 155, 0);
        let expected_on = 0.9 * 165.0 / 175.0;

        assert!((chances.get(Color::Green) - expected_on).abs() < TOLERANCE);
        assert!((chances.get(Color::Red) - (1.0 - expected_on) / 2.0).abs() < TOLERANCE);
        assert_eq!(chances.get(Color::Red), chances.get(Color::Blue));
        assert_eq!(chances.model(), ChanceModel::SingleAttribute(Color::Green));
        assert_sums_to_one(&chances);
    }

    #[test]
    fn single_requirement_keeps_color_identity() {
        for (reqs, color) in [
            ((50, 0, 0), Color::Red),
            ((0, 50, 0), Color::Green),
            ((0, 0, 50), Color::Blue),
        ] {
            let chances = chances_for(reqs.0, reqs.1, reqs.2);
            let on = chances.get(color);
            for other in Color::ALL.into_iter().filter(|&c| c != color) {
                assert!(on > chances.get(other));
            }
        }
    }

    #[test]
    fn equal_dual_requirements_split_evenly() {
        let chances = chances_for(62, 0, 62);
        assert!((chances.get(Color::Red) - 0.45).abs() < TOLERANCE);
        assert!((chances.get(Color::Blue) - 0.45).abs() < TOLERANCE);
        assert!((chances.get(Color::Green) - 0.1).abs() < TOLERANCE);
        assert_sums_to_one(&chances);
    }

    #[test]
    fn equal_dual_requirements_are_reproducible() {
        let first = chances_for(62, 62, 0);
        let second = chances_for(62, 62, 0);
        assert_eq!(first, second);
        assert_eq!(
            first.model(),
            ChanceModel::DualAttribute {
                dominant: Color::Green,
                secondary: Color::Red,
            }
        );
    }

    #[test]
    fn dual_requirements_map_back_to_attributes() {
        // int is dominant even though it is listed last
        let chances = chances_for(0, 44, 132);
        let dominant = 0.9 * 132.0 / 176.0;

        assert!((chances.get(Color::Blue) - dominant).abs() < TOLERANCE);
        assert!((chances.get(Color::Green) - (0.9 - dominant)).abs() < TOLERANCE);
        assert!((chances.get(Color::Red) - 0.1).abs() < TOLERANCE);
        assert_sums_to_one(&chances);
    }

    #[test]
    fn triple_requirements_fall_back_to_uniform() {
        let chances = chances_for(10, 20, 30);
        assert_eq!(chances.as_array(), [1.0 / 3.0; 3]);
        assert_eq!(chances.model(), ChanceModel::TripleAttributeFallback);
        assert!(chances.model().is_approximation());
    }

    #[test]
    fn iter_pairs_colors_with_chances() {
        let chances = chances_for(100, 0, 0);
        let pairs: Vec<_> = chances.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, Color::Red);
        assert!((pairs[0].1 - chances.get(Color::Red)).abs() < f64::EPSILON);
    }
}
