//! movavg-engine - moving averages and spreadsheet column addressing.

pub mod engine;
