use std::path::PathBuf;

use thiserror::Error;

use gildedrose_core::DomainError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("inventory record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: DomainError,
    },
}
