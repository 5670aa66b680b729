//! Local CSV workbook: a directory where spreadsheet `id` is the file `id.csv`.
//!
//! The first record of a file is its header row. Blank lines are rows whose
//! cells are all empty, not separators. Writes go through a temp file and a
//! rename, so a batch lands on disk completely or not at all.

use crate::error::{MovavgError, Result};
use crate::placement::ColumnWriteRequest;
use crate::source::{Credentials, TableSink, TableSource};
use crate::table::Table;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const SHEET_EXTENSION: &str = "csv";

/// A directory of CSV sheets.
#[derive(Clone, Debug)]
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> CsvWorkbook {
        CsvWorkbook { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the sheet backing `spreadsheet_id`.
    pub fn sheet_path(&self, spreadsheet_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", spreadsheet_id, SHEET_EXTENSION))
    }

    /// A writer for the sheet `spreadsheet_id`.
    pub fn writer(&self, spreadsheet_id: &str) -> CsvSheetWriter {
        CsvSheetWriter {
            path: self.sheet_path(spreadsheet_id),
        }
    }
}

impl TableSource for CsvWorkbook {
    fn fetch(&self, spreadsheet_id: &str, credentials: &Credentials) -> Result<Table> {
        debug!(
            "Opening {} (scope {:?}, key file {})",
            spreadsheet_id,
            credentials.scope,
            credentials.key_file.display()
        );
        if !self.dir.is_dir() {
            return Err(MovavgError::SourceUnavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        if !is_plain_id(spreadsheet_id) {
            return Err(MovavgError::SpreadsheetNotFound(spreadsheet_id.to_string()));
        }
        let path = self.sheet_path(spreadsheet_id);
        let records = match read_records(&path) {
            Ok(records) => records,
            Err(MovavgError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                return Err(MovavgError::SpreadsheetNotFound(spreadsheet_id.to_string()));
            }
            Err(MovavgError::Io(err)) => {
                return Err(MovavgError::SourceUnavailable(format!(
                    "{}: {}",
                    path.display(),
                    err
                )));
            }
            Err(err) => return Err(err),
        };
        Table::from_records(records)
    }
}

/// Writes into one CSV sheet of a [`CsvWorkbook`].
#[derive(Clone, Debug)]
pub struct CsvSheetWriter {
    path: PathBuf,
}

impl CsvSheetWriter {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for CsvSheetWriter {
    fn append_columns(&mut self, count: usize) -> Result<()> {
        let mut records = read_records(&self.path)?;
        let width = records.iter().map(Vec::len).max().unwrap_or(0) + count;
        for record in &mut records {
            record.resize(width, String::new());
        }
        write_records(&self.path, &records)
    }

    fn write_cells(&mut self, request: &ColumnWriteRequest) -> Result<()> {
        let mut records = read_records(&self.path)?;
        for (address, value) in request.cells() {
            if address.col == 0 || address.row == 0 {
                return Err(MovavgError::InvalidAddress(address.to_string()));
            }
            set_cell(&mut records, address.row - 1, address.col - 1, value);
        }
        let width = records.iter().map(Vec::len).max().unwrap_or(0);
        for record in &mut records {
            record.resize(width, String::new());
        }
        write_records(&self.path, &records)?;
        debug!(
            "Wrote {} cells to {}",
            request.values.len() + 1,
            self.path.display()
        );
        Ok(())
    }
}

fn set_cell(records: &mut Vec<Vec<String>>, row: usize, col: usize, value: &str) {
    if records.len() <= row {
        records.resize_with(row + 1, Vec::new);
    }
    let record = &mut records[row];
    if record.len() <= col {
        record.resize(col + 1, String::new());
    }
    record[col] = value.to_string();
}

/// Ids name a file inside the workbook directory and nothing else.
fn is_plain_id(spreadsheet_id: &str) -> bool {
    !spreadsheet_id.is_empty()
        && spreadsheet_id != "."
        && spreadsheet_id != ".."
        && !spreadsheet_id.contains(['/', '\\'])
}

/// Read every record of a sheet. Ragged rows are kept as they are, and a
/// blank line between records is a row with one empty cell.
pub(crate) fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let data = std::fs::read(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());
    let mut records = Vec::new();
    let mut record = ::csv::StringRecord::new();
    let mut end = 0usize;
    while reader.read_record(&mut record)? {
        if !records.is_empty() {
            for _ in 0..blank_lines_after(&data, end) {
                records.push(vec![String::new()]);
            }
        }
        records.push(record.iter().map(str::to_string).collect());
        end = reader.position().byte() as usize;
    }
    Ok(records)
}

/// Count the blank lines the reader skipped, starting at byte `end` where the
/// previous record stopped. The previous record's own line terminator may or
/// may not have been consumed yet.
fn blank_lines_after(data: &[u8], end: usize) -> usize {
    let end = end.min(data.len());
    let newlines = data[end..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .filter(|&&b| b == b'\n')
        .count();
    let terminated = end == 0 || data[end - 1] == b'\n';
    if terminated {
        newlines
    } else {
        newlines.saturating_sub(1)
    }
}

/// Replace the sheet at `path` with `records`. The data goes to a temp file in
/// the same directory first, which is removed again if anything fails.
pub(crate) fn write_records(path: &Path, records: &[Vec<String>]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut writer = ::csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut tmp);
        for record in records {
            writer.write_record(record)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
