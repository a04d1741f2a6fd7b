//! `gildedrose` command-line entry point.
//!
//! Builds an inventory (built-in demo data or a JSON file), ages it for the
//! requested number of days and prints the result.

pub mod config;
pub mod error;
pub mod inventory;
pub mod report;
pub mod simulation;

pub use config::Args;
pub use error::CliError;
pub use inventory::{ItemRecord, demo_inventory, load_inventory, parse_inventory};
pub use simulation::simulate;
