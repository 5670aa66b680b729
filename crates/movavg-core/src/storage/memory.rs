//! In-memory worksheet, readable and writable.

use crate::error::{MovavgError, Result};
use crate::placement::ColumnWriteRequest;
use crate::source::{Credentials, TableSink, TableSource};
use crate::table::Table;
use movavg_engine::engine::CellAddress;
use std::collections::BTreeMap;

/// A single worksheet held in memory under one spreadsheet id.
///
/// Records what the sink side was asked to do so callers can inspect it.
#[derive(Clone, Debug, Default)]
pub struct MemorySheet {
    id: String,
    records: Vec<Vec<String>>,
    unavailable: bool,
    /// Total columns requested through [`TableSink::append_columns`].
    pub appended_columns: usize,
    /// Cells written through [`TableSink::write_cells`].
    pub written: BTreeMap<CellAddress, String>,
    /// Number of `write_cells` batches received.
    pub write_batches: usize,
}

impl MemorySheet {
    /// A sheet whose first record is the header row.
    pub fn new(id: impl Into<String>, records: Vec<Vec<String>>) -> MemorySheet {
        MemorySheet {
            id: id.into(),
            records,
            ..MemorySheet::default()
        }
    }

    /// Build from string literals, mostly for tests.
    pub fn from_rows(id: impl Into<String>, rows: &[&[&str]]) -> MemorySheet {
        let records = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        MemorySheet::new(id, records)
    }

    /// Make every fetch fail with `SourceUnavailable`.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn has_writes(&self) -> bool {
        self.appended_columns > 0 || self.write_batches > 0
    }

    /// Written cells of one column, top to bottom.
    pub fn written_column(&self, col: usize) -> Vec<(usize, &str)> {
        self.written
            .iter()
            .filter(|(address, _)| address.col == col)
            .map(|(address, value)| (address.row, value.as_str()))
            .collect()
    }
}

impl TableSource for MemorySheet {
    fn fetch(&self, spreadsheet_id: &str, _credentials: &Credentials) -> Result<Table> {
        if self.unavailable {
            return Err(MovavgError::SourceUnavailable(format!(
                "{} is offline",
                self.id
            )));
        }
        if spreadsheet_id != self.id {
            return Err(MovavgError::SpreadsheetNotFound(spreadsheet_id.to_string()));
        }
        Table::from_records(self.records.clone())
    }
}

impl TableSink for MemorySheet {
    fn append_columns(&mut self, count: usize) -> Result<()> {
        self.appended_columns += count;
        Ok(())
    }

    fn write_cells(&mut self, request: &ColumnWriteRequest) -> Result<()> {
        for (address, value) in request.cells() {
            self.written.insert(address, value.to_string());
        }
        self.write_batches += 1;
        Ok(())
    }
}
