//! Interfaces to the spreadsheet being read and written.

use crate::error::Result;
use crate::placement::ColumnWriteRequest;
use crate::table::Table;
use std::path::PathBuf;

/// What a source needs to authorize a read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Service account key file.
    pub key_file: PathBuf,
    /// Access scope requested with the key.
    pub scope: String,
}

impl Credentials {
    pub fn new(key_file: impl Into<PathBuf>, scope: impl Into<String>) -> Credentials {
        Credentials {
            key_file: key_file.into(),
            scope: scope.into(),
        }
    }
}

/// Reads the first worksheet of a spreadsheet.
pub trait TableSource {
    /// Fails with `SourceUnavailable`, `SpreadsheetNotFound` or `EmptyData`.
    fn fetch(&self, spreadsheet_id: &str, credentials: &Credentials) -> Result<Table>;
}

/// Writes results back to the worksheet that was read.
pub trait TableSink {
    /// Grow the worksheet by `count` columns.
    fn append_columns(&mut self, count: usize) -> Result<()>;

    /// Write the header and every value of `request` as one batch.
    fn write_cells(&mut self, request: &ColumnWriteRequest) -> Result<()>;
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn fetch(&self, spreadsheet_id: &str, credentials: &Credentials) -> Result<Table> {
        (**self).fetch(spreadsheet_id, credentials)
    }
}

impl<T: TableSink + ?Sized> TableSink for &mut T {
    fn append_columns(&mut self, count: usize) -> Result<()> {
        (**self).append_columns(count)
    }

    fn write_cells(&mut self, request: &ColumnWriteRequest) -> Result<()> {
        (**self).write_cells(request)
    }
}
