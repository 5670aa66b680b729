//! Run configuration loaded from `config.toml`.

use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use movavg_core::Credentials;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for one run, built once at startup and passed down.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Service account key file used to reach the spreadsheet.
    pub credentials_json: PathBuf,
    /// Number of points averaged per value.
    pub calc_window: usize,
    pub spreadsheet_id: String,
    /// Access scope requested with the credentials.
    pub scope: String,
    /// Directory holding `<spreadsheet_id>.csv` sheets.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Read and validate a config file. Relative paths inside it resolve
    /// against the file's own directory.
    pub fn load(path: &Path) -> Result<Config> {
        let meta = std::fs::metadata(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if meta.len() > MAX_CONFIG_FILE_BYTES {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: meta.len(),
                max: MAX_CONFIG_FILE_BYTES,
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Config::parse(&content, base)
    }

    /// Parse config text, resolving relative paths against `base`.
    pub fn parse(content: &str, base: &Path) -> Result<Config> {
        let mut config: Config = toml::from_str(content)?;
        config.validate()?;
        config.credentials_json = resolve(base, &config.credentials_json);
        config.data_dir = Some(match config.data_dir.take() {
            Some(dir) => resolve(base, &dir),
            None => base.to_path_buf(),
        });
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.calc_window == 0 {
            return Err(ConfigError::InvalidWindow(self.calc_window));
        }
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::MissingSpreadsheetId);
        }
        Ok(())
    }

    /// Replace the spreadsheet id, e.g. from the command line.
    pub fn with_spreadsheet_id(mut self, id: Option<String>) -> Config {
        if let Some(id) = id.filter(|id| !id.trim().is_empty()) {
            self.spreadsheet_id = id;
        }
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.credentials_json.clone(), self.scope.clone())
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// `./config.toml` when present, otherwise the per-user config file.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    user_config_path().unwrap_or(local)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "movavg")?;
    Some(proj.config_dir().join(CONFIG_FILE_NAME))
}
