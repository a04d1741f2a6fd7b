use std::path::PathBuf;

use clap::Parser;

use gildedrose_observability::{LogFormat, ObservabilityConfig};

/// Age the Gilded Rose inventory day by day.
///
/// Every flag can also be set through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "gildedrose", author, version, about, long_about = None)]
pub struct Args {
    /// Number of days to simulate
    #[arg(long, short, env = "GILDED_ROSE_DAYS", default_value_t = 1)]
    pub days: u32,

    /// JSON inventory file (defaults to the built-in demo inventory)
    #[arg(long, short, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Print the inventory after every day instead of only at the end
    #[arg(long, default_value_t = false)]
    pub every_day: bool,

    /// Log format: `json` or `text`
    #[arg(long, env = "GILDED_ROSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// Also append log lines to this file
    #[arg(long, env = "GILDED_ROSE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            format: self.log_format,
            file: self.log_file.clone(),
        }
    }
}
