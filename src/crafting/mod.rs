//! Crafting options for re-rolling socket colors

mod catalog;

pub use catalog::{CraftingOption, crafting_options};
