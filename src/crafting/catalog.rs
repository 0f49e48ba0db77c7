//! Crafting bench catalog
//!
//! The bench can lock up to three sockets to chosen colors before the rest are
//! re-rolled. Every combination of up to three locked colors is offered except
//! one of each color.

use crate::core::Color;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::LazyLock;

/// Currency cost of each option, keyed by its locked counts sorted ascending
const BENCH_COSTS: [([u8; 3], u32); 6] = [
    ([0, 0, 0], 1),
    ([0, 0, 1], 4),
    ([0, 1, 1], 15),
    ([0, 0, 2], 25),
    ([0, 1, 2], 100),
    ([0, 0, 3], 120),
];

/// Most sockets the bench can lock in one craft
const MAX_LOCKED: usize = 3;

/// Locked counts that the bench does not offer
const EXCLUDED: [u8; 3] = [1, 1, 1];

static CATALOG: LazyLock<Vec<CraftingOption>> = LazyLock::new(build_catalog);

/// A way of re-rolling socket colors
///
/// `fixed` holds how many sockets are locked to R, G and B. The remaining
/// sockets roll randomly on every attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CraftingOption {
    label: String,
    fixed: [u8; 3],
    cost: u32,
}

impl CraftingOption {
    fn new(fixed: [u8; 3], cost: u32) -> Self {
        Self {
            label: label_for(fixed),
            fixed,
            cost,
        }
    }

    /// Display name, e.g. `"chromatic"` or `"bench 2R1B"`
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Locked socket counts in R, G, B order
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> [u8; 3] {
        self.fixed
    }

    /// Locked count for one color
    #[inline]
    #[must_use]
    pub const fn fixed_for(&self, color: Color) -> u8 {
        self.fixed[color.index()]
    }

    /// Total number of locked sockets
    #[must_use]
    pub fn fixed_total(&self) -> u8 {
        self.fixed.iter().sum()
    }

    /// Currency spent per attempt
    #[inline]
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl fmt::Display for CraftingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The full bench catalog, built on first use
///
/// # Examples
/// ```
/// use chromatic_calc::crafting::crafting_options;
///
/// let options = crafting_options();
/// assert_eq!(options.len(), 19);
/// assert_eq!(options[0].label(), "chromatic");
/// assert_eq!(options[0].cost(), 1);
/// ```
#[must_use]
pub fn crafting_options() -> &'static [CraftingOption] {
    &CATALOG
}

/// Enumerate every multiset of three symbols drawn from R, G, B and "none",
/// reduce them to color counts and price them
fn build_catalog() -> Vec<CraftingOption> {
    let costs: FxHashMap<[u8; 3], u32> = BENCH_COSTS.into_iter().collect();

    // `None` stands for a slot the craft leaves unlocked
    let symbols: [Option<Color>; 4] = [
        Some(Color::Red),
        Some(Color::Green),
        Some(Color::Blue),
        None,
    ];

    let mut seen: FxHashSet<[u8; 3]> = FxHashSet::default();
    let mut options = Vec::new();

    for multiset in combinations_with_replacement(symbols.len(), MAX_LOCKED) {
        let mut fixed = [0u8; 3];
        for color in multiset.iter().filter_map(|&i| symbols[i]) {
            fixed[color.index()] += 1;
        }

        if fixed == EXCLUDED || !seen.insert(fixed) {
            continue;
        }

        let mut key = fixed;
        key.sort_unstable();
        if let Some(&cost) = costs.get(&key) {
            options.push(CraftingOption::new(fixed, cost));
        }
    }

    // Stable: same-size options keep enumeration order
    options.sort_by_key(CraftingOption::fixed_total);
    options
}

/// Non-decreasing index tuples of length `k` over `0..n`, in lexicographic order
fn combinations_with_replacement(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    for first in 0..n {
        for mut rest in combinations_with_replacement(n - first, k - 1) {
            for index in &mut rest {
                *index += first;
            }
            rest.insert(0, first);
            result.push(rest);
        }
    }
    result
}

fn label_for(fixed: [u8; 3]) -> String {
    let parts: String = Color::ALL
        .into_iter()
        .filter(|&color| fixed[color.index()] > 0)
        .map(|color| format!("{}{}", fixed[color.index()], color.letter()))
        .collect();

    if parts.is_empty() {
        "chromatic".to_string()
    } else {
        format!("bench {parts}")
    }
}
