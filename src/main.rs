//! movavg - append a moving average of the Visitors column to a spreadsheet

mod config;
mod error;

use anyhow::Context;
use clap::Parser;
use config::Config;
use log::{LevelFilter, info};
use movavg_core::storage::CsvWorkbook;
use movavg_core::{Calculation, Outcome, calculate_moving_average};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Spreadsheet id, overriding `spreadsheet_id` from the config file.
    #[arg(short, long)]
    id: Option<String>,

    /// Config file (default: ./config.toml, then the user config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each step of the run.
    #[arg(short, long)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter_level(level_filter)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?
        .with_spreadsheet_id(cli.id);

    let credentials = config.credentials();
    let workbook = CsvWorkbook::new(config.data_dir());
    let mut writer = workbook.writer(&config.spreadsheet_id);
    info!(
        "Using spreadsheet {} from {}",
        config.spreadsheet_id,
        workbook.dir().display()
    );

    let calculation = Calculation {
        spreadsheet_id: &config.spreadsheet_id,
        credentials: &credentials,
        calc_window: config.calc_window,
    };
    let outcome = calculate_moving_average(&calculation, &workbook, &mut writer)
        .with_context(|| format!("Moving average of {} failed", config.spreadsheet_id))?;

    match outcome {
        Outcome::Completed(request) => {
            println!(
                "Calculation finished: {} written to column {}",
                request.header, request.column
            );
        }
        Outcome::InsufficientData { rows, calc_window } => {
            println!(
                "Not enough data to calculate moving average with window {} ({} rows)",
                calc_window, rows
            );
        }
    }
    Ok(())
}
