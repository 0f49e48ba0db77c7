//! Multinomial and geometric distribution helpers
//!
//! A single roll colors every free socket independently, so the chance of a
//! specific color count is a multinomial PMF. Repeating the roll until success
//! is a geometric process over that chance.

use crate::core::ConfidenceLevel;

/// Multinomial probability of observing exactly `counts` in `trials` draws
///
/// Returns 0 when the counts do not add up to `trials`.
///
/// # Formula
/// n! / (r! g! b!) × p_r^r × p_g^g × p_b^b
///
/// # Examples
/// ```
/// use chromatic_calc::calculator::multinomial_pmf;
///
/// let p = multinomial_pmf([2, 2, 2], 6, [1.0 / 3.0; 3]);
/// assert!((p - 90.0 / 729.0).abs() < 1e-12);
///
/// assert_eq!(multinomial_pmf([1, 1, 1], 6, [1.0 / 3.0; 3]), 0.0);
/// ```
#[must_use]
pub fn multinomial_pmf(counts: [u32; 3], trials: u32, probabilities: [f64; 3]) -> f64 {
    if counts.iter().sum::<u32>() != trials {
        return 0.0;
    }

    let coefficient = counts
        .iter()
        .fold(factorial(trials), |acc, &k| acc / factorial(k));

    counts
        .iter()
        .zip(probabilities)
        .fold(coefficient, |acc, (&k, p)| {
            acc * p.powi(i32::try_from(k).unwrap_or(i32::MAX))
        })
}

fn factorial(n: u32) -> f64 {
    (2..=n).map(f64::from).product()
}

/// Probability of at least one success within `attempts` tries
#[must_use]
pub fn geometric_cdf(success_probability: f64, attempts: u64) -> f64 {
    1.0 - (1.0 - success_probability).powf(attempts as f64)
}

/// Smallest number of attempts whose cumulative success chance reaches `confidence`
///
/// Uses the closed form `ceil(ln(1 - c) / ln(1 - p))`, then nudges the result
/// so it is the minimal `k` under [`geometric_cdf`]. `p >= 1` needs one attempt;
/// `p <= 0` never succeeds and saturates to `u64::MAX`.
///
/// # Examples
/// ```
/// use chromatic_calc::calculator::attempts_for_confidence;
///
/// assert_eq!(attempts_for_confidence(0.5, 0.5), 1);
/// assert_eq!(attempts_for_confidence(0.5, 0.75), 2);
/// assert_eq!(attempts_for_confidence(1.0, 0.99), 1);
/// ```
#[must_use]
pub fn attempts_for_confidence(success_probability: f64, confidence: f64) -> u64 {
    if success_probability >= 1.0 {
        return 1;
    }
    if success_probability <= 0.0 || success_probability.is_nan() {
        return u64::MAX;
    }

    let estimate = ((-confidence).ln_1p() / (-success_probability).ln_1p()).ceil();
    if !estimate.is_finite() || estimate >= u64::MAX as f64 {
        return u64::MAX;
    }

    let mut attempts = (estimate as u64).max(1);

    // Floating point can land one step off the true minimum
    for _ in 0..2 {
        if attempts > 1 && geometric_cdf(success_probability, attempts - 1) >= confidence {
            attempts -= 1;
        }
    }
    for _ in 0..2 {
        if geometric_cdf(success_probability, attempts) < confidence {
            attempts += 1;
        }
    }

    attempts
}

/// Attempts needed at every supported confidence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentiles {
    attempts: [u64; 6],
}

impl Percentiles {
    /// Compute every percentile for a per-attempt success chance
    #[must_use]
    pub fn from_probability(success_probability: f64) -> Self {
        let mut attempts = [0; 6];
        for level in ConfidenceLevel::ALL {
            attempts[level.index()] = attempts_for_confidence(success_probability, level.fraction());
        }
        Self { attempts }
    }

    /// Attempts needed to succeed with confidence `level`
    #[inline]
    #[must_use]
    pub const fn get(&self, level: ConfidenceLevel) -> u64 {
        self.attempts[level.index()]
    }

    /// Iterate `(level, attempts)` pairs, lowest level first
    pub fn iter(&self) -> impl Iterator<Item = (ConfidenceLevel, u64)> + '_ {
        ConfidenceLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFORM: [f64; 3] = [1.0 / 3.0; 3];

    #[test]
    fn factorial_small_values() {
        assert!((factorial(0) - 1.0).abs() < f64::EPSILON);
        assert!((factorial(1) - 1.0).abs() < f64::EPSILON);
        assert!((factorial(6) - 720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multinomial_uniform_two_each() {
        let p = multinomial_pmf([2, 2, 2], 6, UNIFORM);
        assert!((p - 90.0 / 729.0).abs() < 1e-12);
        assert!((p - 0.12346).abs() < 1e-5);
    }

    #[test]
    fn multinomial_requires_matching_total() {
        assert_eq!(multinomial_pmf([2, 2, 1], 6, UNIFORM), 0.0);
        assert_eq!(multinomial_pmf([3, 3, 3], 6, UNIFORM), 0.0);
    }

    #[test]
    fn multinomial_zero_trials_is_certain() {
        assert!((multinomial_pmf([0, 0, 0], 0, UNIFORM) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multinomial_sums_to_one_over_support() {
        let probabilities = [0.5, 0.3, 0.2];
        let n = 5;
        let mut total = 0.0;
        for r in 0..=n {
            for g in 0..=(n - r) {
                total += multinomial_pmf([r, g, n - r - g], n, probabilities);
            }
        }
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn multinomial_zero_probability_color() {
        let probabilities = [0.5, 0.5, 0.0];
        assert!((multinomial_pmf([1, 1, 0], 2, probabilities) - 0.5).abs() < 1e-12);
        assert_eq!(multinomial_pmf([1, 0, 1], 2, probabilities), 0.0);
    }

    #[test]
    fn geometric_cdf_basics() {
        assert!((geometric_cdf(0.5, 1) - 0.5).abs() < 1e-12);
        assert!((geometric_cdf(0.5, 2) - 0.75).abs() < 1e-12);
        assert!(geometric_cdf(0.1, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn attempts_are_minimal() {
        for &p in &[0.9, 0.5, 0.123_456_79, 0.05, 0.01, 0.001_5, 1e-5] {
            for level in ConfidenceLevel::ALL {
                let c = level.fraction();
                let k = attempts_for_confidence(p, c);
                assert!(k >= 1);
                assert!(geometric_cdf(p, k) >= c, "p={p} c={c} k={k}");
                assert!(
                    k == 1 || geometric_cdf(p, k - 1) < c,
                    "p={p} c={c} k={k} is not minimal"
                );
            }
        }
    }

    #[test]
    fn attempts_at_66_percent() {
        let p = 90.0 / 729.0;
        let k = attempts_for_confidence(p, 0.66);
        assert!(1.0 - (1.0 - p).powf(k as f64) >= 0.66);
        assert!(1.0 - (1.0 - p).powf((k - 1) as f64) < 0.66);
        assert_eq!(k, 9);
    }

    #[test]
    fn attempts_certain_success() {
        assert_eq!(attempts_for_confidence(1.0, 0.99), 1);
        assert_eq!(attempts_for_confidence(1.5, 0.5), 1);
    }

    #[test]
    fn attempts_impossible_success_saturates() {
        assert_eq!(attempts_for_confidence(0.0, 0.5), u64::MAX);
        assert_eq!(attempts_for_confidence(f64::NAN, 0.5), u64::MAX);
    }

    #[test]
    fn attempts_grow_with_confidence() {
        let percentiles = Percentiles::from_probability(0.02);
        let values: Vec<u64> = percentiles.iter().map(|(_, k)| k).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn percentiles_lookup_by_level() {
        let percentiles = Percentiles::from_probability(0.5);
        assert_eq!(percentiles.get(ConfidenceLevel::P50), 1);
        assert_eq!(percentiles.get(ConfidenceLevel::P66), 2);
        assert_eq!(percentiles.get(ConfidenceLevel::P99), 7);
    }
}
