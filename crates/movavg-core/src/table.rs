//! Tabular sheet data and column extraction.

use crate::error::{MovavgError, Result};
use movavg_engine::engine::coerce_int;
use std::collections::HashMap;

/// A header row plus the data rows below it.
///
/// Every row is expected to be as long as `headers`; sources are responsible
/// for that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table { headers, rows }
    }

    /// Split raw sheet records into header row and data rows.
    ///
    /// A sheet without data rows (including a completely blank one) is
    /// [`MovavgError::EmptyData`].
    pub fn from_records(records: Vec<Vec<String>>) -> Result<Table> {
        let mut records = records.into_iter();
        let headers = records.next().ok_or(MovavgError::EmptyData)?;
        let rows: Vec<Vec<String>> = records.collect();
        if rows.is_empty() {
            return Err(MovavgError::EmptyData);
        }
        Ok(Table { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Build the header lookup once for repeated extraction.
    pub fn header_index(&self) -> HeaderIndex {
        HeaderIndex::new(&self.headers)
    }

    /// Extract a column by header name. See [`extract_column`].
    pub fn extract_column(&self, name: &str, kind: ValueKind) -> Result<NamedColumn> {
        extract_column(self, &self.header_index(), name, kind)
    }

    /// Extract a column as integers. See [`extract_integers`].
    pub fn extract_integers(&self, name: &str, default: i64) -> Result<Vec<i64>> {
        extract_integers(self, &self.header_index(), name, default)
    }
}

/// Header name to column position. Duplicate headers resolve to the first one.
#[derive(Clone, Debug)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(headers: &[String]) -> HeaderIndex {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            positions.entry(header.clone()).or_insert(i);
        }
        HeaderIndex { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

/// How extracted cells should be typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    /// Parse as integers; cells that are not integers become `default`.
    Integer { default: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnValues {
    Text(Vec<String>),
    Integer(Vec<i64>),
}

/// One column of a table, one value per data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColumn {
    pub header: String,
    pub values: ColumnValues,
}

impl NamedColumn {
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Integer(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match &self.values {
            ColumnValues::Integer(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match &self.values {
            ColumnValues::Text(v) => Some(v),
            ColumnValues::Integer(_) => None,
        }
    }
}

/// Pull the column headed `name` out of `table`.
///
/// Matching is exact and uses the first header with that name. A row too
/// short to reach the column contributes an empty cell.
pub fn extract_column(
    table: &Table,
    index: &HeaderIndex,
    name: &str,
    kind: ValueKind,
) -> Result<NamedColumn> {
    let values = match kind {
        ValueKind::Text => ColumnValues::Text(
            column_cells(table, index, name)?
                .map(str::to_string)
                .collect(),
        ),
        ValueKind::Integer { default } => {
            ColumnValues::Integer(extract_integers(table, index, name, default)?)
        }
    };

    Ok(NamedColumn {
        header: name.to_string(),
        values,
    })
}

/// Like [`extract_column`] with [`ValueKind::Integer`], returning the values only.
pub fn extract_integers(
    table: &Table,
    index: &HeaderIndex,
    name: &str,
    default: i64,
) -> Result<Vec<i64>> {
    Ok(column_cells(table, index, name)?
        .map(|cell| coerce_int(cell, default))
        .collect())
}

fn column_cells<'t>(
    table: &'t Table,
    index: &HeaderIndex,
    name: &str,
) -> Result<impl Iterator<Item = &'t str> + use<'t>> {
    let position = index
        .position(name)
        .ok_or_else(|| MovavgError::ColumnNotFound(name.to_string()))?;
    Ok(table
        .rows
        .iter()
        .map(move |row| row.get(position).map(String::as_str).unwrap_or("")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn visitors_table() -> Table {
        Table::new(
            record(&["Date", "Visitors"]),
            vec![
                record(&["2018-01-01", "10"]),
                record(&["2018-01-02", "n/a"]),
                record(&["2018-01-03", "30"]),
            ],
        )
    }

    #[test]
    fn test_from_records_splits_header() {
        let table = Table::from_records(vec![record(&["Visitors"]), record(&["1"])]).unwrap();
        assert_eq!(table.headers, record(&["Visitors"]));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_from_records_header_only_is_empty() {
        let err = Table::from_records(vec![record(&["Visitors", "Date"])]).unwrap_err();
        assert!(matches!(err, MovavgError::EmptyData));
    }

    #[test]
    fn test_from_records_no_records_is_empty() {
        let err = Table::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, MovavgError::EmptyData));
    }

    #[test]
    fn test_extract_integer_column_with_default() {
        let column = visitors_table()
            .extract_column("Visitors", ValueKind::Integer { default: 0 })
            .unwrap();
        assert_eq!(column.header, "Visitors");
        assert_eq!(column.as_integers(), Some(&[10, 0, 30][..]));
    }

    #[test]
    fn test_extract_text_column() {
        let column = visitors_table()
            .extract_column("Date", ValueKind::Text)
            .unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column.as_text().unwrap()[1], "2018-01-02");
        assert!(column.as_integers().is_none());
    }

    #[test]
    fn test_extract_missing_column() {
        let err = visitors_table()
            .extract_column("visitors", ValueKind::Text)
            .unwrap_err();
        assert!(matches!(err, MovavgError::ColumnNotFound(name) if name == "visitors"));
    }

    #[test]
    fn test_duplicate_header_uses_first() {
        let table = Table::new(record(&["X", "X"]), vec![record(&["1", "2"])]);
        let index = table.header_index();
        assert_eq!(index.position("X"), Some(0));
        let column = extract_column(&table, &index, "X", ValueKind::Integer { default: 0 }).unwrap();
        assert_eq!(column.as_integers(), Some(&[1][..]));
    }

    #[test]
    fn test_extract_integers_returns_values() {
        let table = visitors_table();
        assert_eq!(table.extract_integers("Visitors", 0).unwrap(), vec![10, 0, 30]);
        assert_eq!(table.extract_integers("Visitors", -1).unwrap(), vec![10, -1, 30]);
    }

    #[test]
    fn test_extract_integers_missing_column() {
        let err = visitors_table().extract_integers("Count", 0).unwrap_err();
        assert!(matches!(err, MovavgError::ColumnNotFound(name) if name == "Count"));
    }

    #[test]
    fn test_blank_cell_counts_as_default() {
        let table = Table::new(
            record(&["Visitors"]),
            vec![record(&["1"]), record(&[""]), record(&["3"])],
        );
        assert_eq!(table.extract_integers("Visitors", 0).unwrap(), vec![1, 0, 3]);
    }
}
