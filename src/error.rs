//! Error types for the movavg binary

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("calc_window must be at least 1, got {0}")]
    InvalidWindow(usize),

    #[error("spreadsheet_id is empty")]
    MissingSpreadsheetId,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
