//! movavg-core - table model, result placement and the moving-average run.

pub mod calc;
pub mod error;
pub mod placement;
pub mod source;
pub mod storage;
pub mod table;

pub use calc::{Calculation, Outcome, Stage, calculate_moving_average, column_label};
pub use error::{MovavgError, Result};
pub use placement::{ColumnWriteRequest, plan_placement};
pub use source::{Credentials, TableSink, TableSource};
pub use table::{
    ColumnValues, HeaderIndex, NamedColumn, Table, ValueKind, extract_column, extract_integers,
};

pub use movavg_engine::engine::{CellAddress, col_index_to_letters, moving_average};
