//! Command implementations

pub mod chances;
pub mod chromatic;

pub use chances::{ChancesReport, ItemConfig, run_chances};
pub use chromatic::{ChromaticConfig, ChromaticReport, run_chromatic};
