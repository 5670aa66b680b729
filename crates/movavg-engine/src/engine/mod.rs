//! Moving-average engine API.
//!
//! - [`col_index_to_letters`], [`CellAddress`] - column letters and A1 cell
//!   addresses (1-based)
//! - [`coerce_int`] - lenient integer parsing of cell text
//! - [`moving_average`] - windowed mean over an integer series

mod cell_ref;
mod coerce;
mod moving_average;

pub use cell_ref::{CellAddress, col_index_to_letters};
pub use coerce::coerce_int;
pub use moving_average::moving_average;
