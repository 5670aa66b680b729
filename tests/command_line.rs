//! Integration tests running the movavg binary against a local CSV workbook

use std::path::Path;
use std::process::Command;

const SCOPE: &str = "https://spreadsheets.google.com/feeds";

fn write_config(dir: &Path, calc_window: usize, spreadsheet_id: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        "credentials_json = \"creds.json\"\n\
         calc_window = {calc_window}\n\
         spreadsheet_id = \"{spreadsheet_id}\"\n\
         scope = \"{SCOPE}\"\n"
    );
    std::fs::write(&path, content).expect("Failed to write config");
    path
}

fn run(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_movavg"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute movavg");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_appends_moving_average_column() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 3, "visits");
    std::fs::write(
        dir.path().join("visits.csv"),
        "Visitors,Date\n1,d1\n2,d2\n3,d3\n4,d4\n5,d5\n6,d6\n7,d7\n",
    )
    .unwrap();

    let (stdout, stderr, code) = run(&["--config", config.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Calculation finished"));
    assert!(stdout.contains("column C"));

    let content = std::fs::read_to_string(dir.path().join("visits.csv")).unwrap();
    assert_eq!(
        content,
        "Visitors,Date,Moving Average 3\n\
         1,d1,\n\
         2,d2,\n\
         3,d3,2\n\
         4,d4,3\n\
         5,d5,4\n\
         6,d6,5\n\
         7,d7,6\n"
    );
}

#[test]
fn test_id_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 1, "visits");
    std::fs::write(dir.path().join("other.csv"), "Visitors\n4\n6\n").unwrap();

    let (stdout, stderr, code) = run(&["-c", config.to_str().unwrap(), "--id", "other"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Moving Average 1"));

    let content = std::fs::read_to_string(dir.path().join("other.csv")).unwrap();
    assert_eq!(content, "Visitors,Moving Average 1\n4,4\n6,6\n");
}

#[test]
fn test_insufficient_data_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 3, "visits");
    let sheet = "Visitors\n1\n2\n3\n";
    std::fs::write(dir.path().join("visits.csv"), sheet).unwrap();

    let (stdout, _, code) = run(&["--config", config.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Not enough data to calculate moving average with window 3"));
    let content = std::fs::read_to_string(dir.path().join("visits.csv")).unwrap();
    assert_eq!(content, sheet);
}

#[test]
fn test_unknown_spreadsheet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 3, "visits");

    let (_, stderr, code) = run(&["--config", config.to_str().unwrap(), "--id", "WrongId"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Spreadsheet not found: WrongId"));
}

#[test]
fn test_header_only_sheet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), 3, "visits");
    std::fs::write(dir.path().join("visits.csv"), "Visitors,Date\n").unwrap();

    let (_, stderr, code) = run(&["--config", config.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Spreadsheet is empty"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let (_, stderr, code) = run(&["--config", missing.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to load config"));
}
