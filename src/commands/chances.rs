//! Color chance command
//!
//! Reports the per-socket color chances for an item.

use crate::chances::{ColorProbabilities, compute_color_chances};
use crate::core::{AttributeRequirements, ChromaError, ItemDescriptor};

/// Raw item input as given on the command line
#[derive(Debug, Clone, Copy)]
pub struct ItemConfig {
    pub sockets: u8,
    pub max_sockets: u8,
    pub requirements: AttributeRequirements,
}

impl ItemConfig {
    /// Validate the input into an item
    ///
    /// # Errors
    /// Returns an error if the socket count or maximum is out of range.
    pub fn to_item(&self) -> Result<ItemDescriptor, ChromaError> {
        ItemDescriptor::with_max_sockets(self.sockets, self.max_sockets, self.requirements)
    }
}

/// Result of the chances command
pub struct ChancesReport {
    pub item: ItemDescriptor,
    pub chances: ColorProbabilities,
}

/// Compute color chances for an item
///
/// # Errors
///
/// Returns an error if the item configuration is invalid.
pub fn run_chances(config: ItemConfig) -> Result<ChancesReport, ChromaError> {
    let item = config.to_item()?;
    let chances = compute_color_chances(&item);

    Ok(ChancesReport { item, chances })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chances::ChanceModel;
    use crate::core::{Color, MAX_SOCKETS};

    fn config(sockets: u8, str_req: u32, dex_req: u32, int_req: u32) -> ItemConfig {
        ItemConfig {
            sockets,
            max_sockets: MAX_SOCKETS,
            requirements: AttributeRequirements::new(str_req, dex_req, int_req),
        }
    }

    #[test]
    fn reports_chances_for_valid_item() {
        let report = run_chances(config(4, 0, 0, 73)).unwrap();
        assert_eq!(report.item.socket_count(), 4);
        assert_eq!(report.chances.model(), ChanceModel::SingleAttribute(Color::Blue));
    }

    #[test]
    fn flags_triple_requirement_approximation() {
        let report = run_chances(config(6, 40, 40, 40)).unwrap();
        assert!(report.chances.model().is_approximation());
    }

    #[test]
    fn rejects_invalid_item() {
        assert!(matches!(
            run_chances(config(0, 0, 0, 0)),
            Err(ChromaError::InvalidSocketCount { .. })
        ));
    }
}
