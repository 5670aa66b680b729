//! Where a computed series lands in the sheet.
//!
//! The result column goes right after the last existing column. Its header
//! sits on row 1. A window of `w` points has no value for the first `w` data
//! rows, so values start on sheet row `w + 1` and the rows in between are
//! never touched.

use movavg_engine::engine::{CellAddress, col_index_to_letters};

/// Row the header of the new column is written to.
pub const HEADER_ROW: usize = 1;

/// A contiguous vertical run of cells: a header and the values below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnWriteRequest {
    /// 1-based column index.
    pub col: usize,
    /// The same column in letter form.
    pub column: String,
    pub header_row: usize,
    pub header: String,
    /// Sheet row of `values[0]`.
    pub first_value_row: usize,
    pub values: Vec<String>,
}

impl ColumnWriteRequest {
    pub fn header_address(&self) -> CellAddress {
        CellAddress::new(self.col, self.header_row)
    }

    /// Sheet row of the last value, or None when there are no values.
    pub fn last_value_row(&self) -> Option<usize> {
        (!self.values.is_empty()).then(|| self.first_value_row + self.values.len() - 1)
    }

    /// A1 range covered by the values, e.g. "C4:C8".
    pub fn value_range(&self) -> Option<String> {
        let last = self.last_value_row()?;
        Some(format!(
            "{}{}:{}{}",
            self.column, self.first_value_row, self.column, last
        ))
    }

    /// Every cell to write, header first, then the values top to bottom.
    pub fn cells(&self) -> Vec<(CellAddress, &str)> {
        let mut cells = Vec::with_capacity(self.values.len() + 1);
        cells.push((self.header_address(), self.header.as_str()));
        for (i, value) in self.values.iter().enumerate() {
            cells.push((
                CellAddress::new(self.col, self.first_value_row + i),
                value.as_str(),
            ));
        }
        cells
    }
}

/// Lay out `series` as a new column after `existing_column_count` columns.
pub fn plan_placement(
    existing_column_count: usize,
    series: &[i64],
    calc_window: usize,
    label: &str,
) -> ColumnWriteRequest {
    let col = existing_column_count + 1;
    ColumnWriteRequest {
        col,
        column: col_index_to_letters(col),
        header_row: HEADER_ROW,
        header: label.to_string(),
        first_value_row: calc_window + 1,
        values: series.iter().map(|v| v.to_string()).collect(),
    }
}
