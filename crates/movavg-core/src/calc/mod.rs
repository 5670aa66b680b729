//! The moving-average run: fetch, validate, extract, compute, plan, write.

mod stage;

pub use stage::Stage;

use crate::error::Result;
use crate::placement::{ColumnWriteRequest, plan_placement};
use crate::source::{Credentials, TableSink, TableSource};
use log::{debug, error, info, warn};
use movavg_engine::engine::moving_average;

/// Column the average is computed over.
pub const VISITORS_COLUMN: &str = "Visitors";

/// Value used for visitor counts that are not integers.
pub const DEFAULT_VISITORS: i64 = 0;

/// Header of the result column for a given window.
pub fn column_label(calc_window: usize) -> String {
    format!("Moving Average {}", calc_window)
}

/// One run's inputs.
#[derive(Clone, Debug)]
pub struct Calculation<'a> {
    pub spreadsheet_id: &'a str,
    pub credentials: &'a Credentials,
    pub calc_window: usize,
}

/// How a run that did not fail ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The result column was written.
    Completed(ColumnWriteRequest),
    /// Not more data rows than the window; nothing was written.
    InsufficientData { rows: usize, calc_window: usize },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

/// Compute the moving average of the Visitors column and append it to the sheet.
///
/// `sink` must write to the same worksheet `source` reads.
pub fn calculate_moving_average<S, W>(
    calculation: &Calculation<'_>,
    source: &S,
    sink: &mut W,
) -> Result<Outcome>
where
    S: TableSource + ?Sized,
    W: TableSink + ?Sized,
{
    let mut stage = Stage::Fetching;
    let result = run(calculation, source, sink, &mut stage);
    match &result {
        Ok(_) => enter(&mut stage, Stage::Done),
        Err(err) => {
            error!("Moving average failed while {}: {}", stage, err);
            enter(&mut stage, Stage::Failed);
        }
    }
    result
}

fn run<S, W>(
    calculation: &Calculation<'_>,
    source: &S,
    sink: &mut W,
    stage: &mut Stage,
) -> Result<Outcome>
where
    S: TableSource + ?Sized,
    W: TableSink + ?Sized,
{
    let calc_window = calculation.calc_window;

    debug!("Stage: {}", stage);
    let table = source.fetch(calculation.spreadsheet_id, calculation.credentials)?;
    info!(
        "Data is loaded: {} rows, {} columns",
        table.row_count(),
        table.column_count()
    );

    enter(stage, Stage::Validating);
    if table.row_count() <= calc_window {
        warn!(
            "Not enough data to calculate moving average with window {}",
            calc_window
        );
        return Ok(Outcome::InsufficientData {
            rows: table.row_count(),
            calc_window,
        });
    }

    enter(stage, Stage::Extracting);
    let visitors = table.extract_integers(VISITORS_COLUMN, DEFAULT_VISITORS)?;

    enter(stage, Stage::Computing);
    let series = moving_average(&visitors, calc_window);

    enter(stage, Stage::Planning);
    let request = plan_placement(
        table.column_count(),
        &series,
        calc_window,
        &column_label(calc_window),
    );

    enter(stage, Stage::Writing);
    sink.append_columns(1)?;
    sink.write_cells(&request)?;
    info!(
        "Calculation finished: wrote {} values to {}",
        request.values.len(),
        request.value_range().unwrap_or_else(|| request.column.clone())
    );

    Ok(Outcome::Completed(request))
}

fn enter(stage: &mut Stage, next: Stage) {
    *stage = next;
    debug!("Stage: {}", next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label() {
        assert_eq!(column_label(3), "Moving Average 3");
        assert_eq!(column_label(10), "Moving Average 10");
    }

    #[test]
    fn test_terminal_stages() {
        assert!(Stage::Done.is_terminal());
        assert!(Stage::Failed.is_terminal());
        assert!(!Stage::Writing.is_terminal());
        assert_eq!(Stage::Extracting.to_string(), "extracting");
    }
}
