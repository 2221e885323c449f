use crate::chart::{MIN_HEIGHT, MIN_WIDTH};
use crate::errors::{AppError, AppResult};
use crate::models::segment::default_styles;
use crate::models::{EventSet, SegmentPalette, SegmentStyle};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_events")]
    pub events: Vec<String>,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default = "default_styles")]
    pub segments: Vec<SegmentStyle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_date_column() -> String {
    "Gregorian Date".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_delimiter() -> char {
    ','
}
fn default_events() -> Vec<String> {
    ["Fajr", "Shuruq", "Zuhr", "Assr", "Maghrib", "Ishaa"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_preview_rows() -> usize {
    5
}
fn default_width() -> u32 {
    1600
}
fn default_height() -> u32 {
    800
}
fn default_output_suffix() -> String {
    "_year_graph".to_string()
}
fn default_show() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output_suffix: default_output_suffix(),
            show: default_show(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            date_format: default_date_format(),
            delimiter: default_delimiter(),
            events: default_events(),
            preview_rows: default_preview_rows(),
            chart: ChartConfig::default(),
            segments: default_styles(),
        }
    }
}

/// Config after startup validation: the event set and palette are checked once
/// and handed to every command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub events: EventSet,
    pub palette: SegmentPalette,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prayergraph")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prayergraph.conf")
    }

    /// Load configuration from an explicit path, from the default location if
    /// present, or fall back to defaults.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        match custom {
            Some(p) => Self::load_from(&expand_tilde(p)),
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Check everything the pipeline relies on before any input is read.
    pub fn validate(self) -> AppResult<Settings> {
        let events = EventSet::new(&self.events)?;
        let palette = SegmentPalette::new(&self.segments)?;

        if self.date_column.trim().is_empty() {
            return Err(AppError::Config("date_column must not be empty".into()));
        }
        if self.chart.width < MIN_WIDTH || self.chart.height < MIN_HEIGHT {
            return Err(AppError::Config(format!(
                "chart size must be at least {MIN_WIDTH}x{MIN_HEIGHT}, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        Ok(Settings {
            config: self,
            events,
            palette,
        })
    }
}
