//! Storage backends implementing [`TableSource`](crate::TableSource) and
//! [`TableSink`](crate::TableSink).

pub mod csv;
pub mod memory;

pub use csv::{CsvSheetWriter, CsvWorkbook};
pub use memory::MemorySheet;
