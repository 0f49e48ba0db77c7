//! Chromatic cost command
//!
//! Parses a target color string, evaluates every crafting option and returns
//! them ranked by cost.

use super::chances::ItemConfig;
use crate::calculator::{ChromaticCalculator, ChromaticResult};
use crate::chances::ColorProbabilities;
use crate::core::{ChromaError, ColorTarget, ConfidenceLevel, ItemDescriptor};
use crate::crafting::crafting_options;

/// Configuration for a chromatic cost calculation
pub struct ChromaticConfig {
    pub item: ItemConfig,
    /// Target colors, e.g. `"2R2G2B"`
    pub colors: String,
    /// Confidence level (percent) used for ranking
    pub sort_by: u8,
}

impl ChromaticConfig {
    #[must_use]
    pub fn new(item: ItemConfig, colors: impl Into<String>) -> Self {
        Self {
            item,
            colors: colors.into(),
            sort_by: ConfidenceLevel::default().percent(),
        }
    }
}

/// Result of the chromatic command
pub struct ChromaticReport {
    pub item: ItemDescriptor,
    pub target: ColorTarget,
    pub chances: ColorProbabilities,
    pub sort_by: ConfidenceLevel,
    /// Feasible options, cheapest first
    pub results: Vec<ChromaticResult>,
}

/// Rank crafting options for reaching the configured target colors
///
/// # Errors
///
/// Returns an error if:
/// - The item configuration is invalid
/// - The color string cannot be parsed
/// - The confidence level is not a supported percentile
pub fn run_chromatic(config: ChromaticConfig) -> Result<ChromaticReport, ChromaError> {
    let item = config.item.to_item()?;
    let target: ColorTarget = config.colors.parse()?;
    let sort_by = ConfidenceLevel::try_from(config.sort_by)?;

    if target.total() != u32::from(item.socket_count()) {
        tracing::warn!(
            colors = %target,
            sockets = item.socket_count(),
            "target color count does not match socket count; no option can reach it"
        );
    }

    let calculator = ChromaticCalculator::new(&item, target);
    let results = calculator.rank(crafting_options(), sort_by);

    tracing::info!(
        feasible = results.len(),
        total = crafting_options().len(),
        sort_by = %sort_by,
        "ranked crafting options"
    );

    Ok(ChromaticReport {
        item,
        target,
        chances: *calculator.chances(),
        sort_by,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributeRequirements, MAX_SOCKETS};

    fn item_config(sockets: u8, str_req: u32, dex_req: u32, int_req: u32) -> ItemConfig {
        ItemConfig {
            sockets,
            max_sockets: MAX_SOCKETS,
            requirements: AttributeRequirements::new(str_req, dex_req, int_req),
        }
    }

    #[test]
    fn default_sort_level_is_66() {
        let config = ChromaticConfig::new(item_config(6, 0, 0, 0), "2R2G2B");
        assert_eq!(config.sort_by, 66);
    }

    #[test]
    fn ranks_uniform_six_link() {
        let config = ChromaticConfig::new(item_config(6, 0, 0, 0), "2R2G2B");
        let report = run_chromatic(config).unwrap();

        assert_eq!(report.target, ColorTarget::new(2, 2, 2));
        assert_eq!(report.sort_by, ConfidenceLevel::P66);
        assert_eq!(report.results[0].option_label, "chromatic");
    }

    #[test]
    fn mismatched_target_yields_empty_report() {
        let config = ChromaticConfig::new(item_config(6, 0, 0, 0), "1R1G");
        let report = run_chromatic(config).unwrap();
        assert!(report.results.is_empty());
    }

    #[test]
    fn rejects_bad_colors() {
        let config = ChromaticConfig::new(item_config(6, 0, 0, 0), "six reds");
        assert!(matches!(
            run_chromatic(config),
            Err(ChromaError::InvalidTarget(_))
        ));
    }

    #[test]
    fn rejects_unsupported_sort_level() {
        let mut config = ChromaticConfig::new(item_config(6, 0, 0, 0), "6R");
        config.sort_by = 75;
        assert_eq!(
            run_chromatic(config).err(),
            Some(ChromaError::InvalidConfidenceLevel(75))
        );
    }

    #[test]
    fn rejects_invalid_item() {
        let config = ChromaticConfig::new(item_config(7, 0, 0, 0), "6R");
        assert!(matches!(
            run_chromatic(config),
            Err(ChromaError::InvalidSocketCount { .. })
        ));
    }

    #[test]
    fn sorts_by_requested_level() {
        let mut config = ChromaticConfig::new(item_config(5, 0, 80, 80), "3R2G");
        config.sort_by = 99;
        let report = run_chromatic(config).unwrap();

        assert_eq!(report.sort_by, ConfidenceLevel::P99);
        assert!(
            report
                .results
                .windows(2)
                .all(|w| w[0].cost_at(ConfidenceLevel::P99) <= w[1].cost_at(ConfidenceLevel::P99))
        );
    }
}
