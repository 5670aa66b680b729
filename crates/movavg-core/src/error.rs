//! Error types for movavg core.

use thiserror::Error;

/// Errors that end a moving-average run.
///
/// Running out of rows for the window is not one of these; it is reported as
/// [`Outcome::InsufficientData`](crate::Outcome::InsufficientData).
#[derive(Error, Debug)]
pub enum MovavgError {
    #[error("Spreadsheet source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("Spreadsheet is empty")]
    EmptyData,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid cell address in write request: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MovavgError>;
