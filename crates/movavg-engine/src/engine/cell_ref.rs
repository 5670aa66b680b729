//! Column letters and cell addresses.
//!
//! Spreadsheet columns are named with bijective base-26 letters (there is no
//! zero digit): `A..Z`, then `AA..AZ`, `BA..`, and so on. Unlike the grid
//! coordinates used elsewhere, everything here is 1-based, matching what a
//! spreadsheet shows to the user.
//!
//! # Examples
//!
//! ```
//! use movavg_engine::engine::{CellAddress, col_index_to_letters};
//!
//! assert_eq!(col_index_to_letters(27), "AA");
//! assert_eq!(CellAddress::new(3, 4).to_string(), "C4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Convert a 1-based column index to spreadsheet letters (1 -> A, 26 -> Z, 27 -> AA).
///
/// Index 0 has no letter form and yields an empty string.
pub fn col_index_to_letters(index: usize) -> String {
    let mut result = String::new();
    let mut n = index as u128;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// A single cell, addressed by 1-based column and row.
///
/// Ordering compares the column first, so addresses within one column sort
/// top to bottom.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellAddress {
    pub col: usize,
    pub row: usize,
}

impl CellAddress {
    pub fn new(col: usize, row: usize) -> CellAddress {
        CellAddress { col, row }
    }

    /// Column part of the address in letter form.
    pub fn column_letters(&self) -> String {
        col_index_to_letters(self.col)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}
