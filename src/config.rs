use crate::error::SimError;
use crate::grid::cell_count;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "explorer_sim.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub run_log: RunLogConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
}

#[derive(Debug, Deserialize)]
pub struct RunLogConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_run_log_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

// Default values
fn default_rows() -> i32 { 5 }
fn default_cols() -> i32 { 5 }
fn default_run_log_path() -> String { "run_log.json".to_string() }
fn default_separator() -> String { " ".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

impl Default for RunLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_run_log_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            run_log: RunLogConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from `path`, failing on a missing or invalid file
    pub fn load_strict(path: &Path) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|e| SimError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        cell_count(config.grid.rows, config.grid.cols).map_err(|e| SimError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// A config path named on the command line must load; otherwise the
    /// default path is optional
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SimError> {
        match explicit {
            Some(path) => {
                let config = Self::load_strict(path)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::load(Path::new(DEFAULT_CONFIG_PATH))),
        }
    }

    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(SimError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                info!("No {} found, using default configuration", path.display());
                Config::default()
            }
            Err(e) => {
                warn!("{}", e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }
}
