//! Configuration management and loading for musclestore.

use anyhow::Context;
use chrono::NaiveDate;
use musclestore_error::{Result, config_error};
use musclestore_logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that pins the reference date (`YYYY-MM-DD`).
pub const TODAY_ENV: &str = "MUSCLESTORE_TODAY";

/// Configuration format types supported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Format implied by a file extension; anything unknown reads as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Main musclestore configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusclestoreConfig {
    /// Fixed reference date for "today". The local clock is used when unset.
    #[serde(default)]
    pub today: Option<NaiveDate>,

    /// Columns in the calendar grid
    #[serde(default = "default_calendar_columns")]
    pub calendar_columns: usize,

    /// Default notation file
    #[serde(default)]
    pub notations: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_calendar_columns() -> usize {
    5
}

impl Default for MusclestoreConfig {
    fn default() -> Self {
        Self {
            today: None,
            calendar_columns: default_calendar_columns(),
            notations: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl MusclestoreConfig {
    /// Effective reference date: `MUSCLESTORE_TODAY`, then the configured date, then `fallback`.
    pub fn resolve_today(&self, fallback: NaiveDate) -> Result<NaiveDate> {
        let env = std::env::var(TODAY_ENV).ok();
        self.resolve_today_from(env.as_deref(), fallback)
    }

    /// [`resolve_today`](Self::resolve_today) with the environment value passed in.
    pub fn resolve_today_from(&self, env: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
        match env.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_date(raw).map_err(|e| e.with_context("var", TODAY_ENV)),
            None => Ok(self.today.unwrap_or(fallback)),
        }
    }
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        config_error("reference date must be YYYY-MM-DD")
            .with_context("input", raw)
            .with_source(e)
    })
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Load configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<MusclestoreConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;

    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("parse JSON config {path:?}")),
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("parse YAML config {path:?}")),
    }
}

/// Save configuration to a file
pub fn save_config<P: AsRef<Path>>(config: &MusclestoreConfig, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("serialize JSON config")?
        }
        ConfigFormat::Yaml => serde_yaml::to_string(config).context("serialize YAML config")?,
    };

    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use musclestore_logging::{LogFormat, LogLevel};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn config_default_values() {
        let config = MusclestoreConfig::default();
        assert_eq!(config.today, None);
        assert_eq!(config.calendar_columns, 5);
        assert_eq!(config.notations, None);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn config_serialize_yaml() {
        let config = MusclestoreConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("calendar_columns"));
    }

    #[test]
    fn config_serialize_json() {
        let config = MusclestoreConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("calendar_columns"));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: MusclestoreConfig =
            serde_yaml::from_str("today: 2024-03-15\nlogging:\n  level: debug\n").unwrap();
        assert_eq!(config.today, Some(date(2024, 3, 15)));
        assert_eq!(config.calendar_columns, 5);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Plain);
    }

    #[test]
    fn config_load_save_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("musclestore.yaml");

        let config = MusclestoreConfig {
            today: Some(date(2024, 2, 29)),
            calendar_columns: 7,
            notations: Some(PathBuf::from("notations.json")),
            logging: LoggingConfig::new().with_format(LogFormat::Json),
        };
        save_config(&config, &path).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn config_load_save_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("musclestore.json");

        let config = MusclestoreConfig {
            calendar_columns: 3,
            ..MusclestoreConfig::default()
        };
        save_config(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.trim_start().starts_with('{'));
        assert_eq!(load_config(&path).unwrap().calendar_columns, 3);
    }

    #[test]
    fn load_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(temp_dir.path().join("absent.yml")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yml"));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn today_precedence() {
        let fallback = date(2030, 1, 1);
        let unset = MusclestoreConfig::default();
        let pinned = MusclestoreConfig {
            today: Some(date(2024, 3, 15)),
            ..MusclestoreConfig::default()
        };

        assert_eq!(unset.resolve_today_from(None, fallback).unwrap(), fallback);
        assert_eq!(pinned.resolve_today_from(None, fallback).unwrap(), date(2024, 3, 15));
        assert_eq!(
            pinned.resolve_today_from(Some("2023-12-31"), fallback).unwrap(),
            date(2023, 12, 31)
        );
        assert_eq!(pinned.resolve_today_from(Some("  "), fallback).unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn invalid_env_date_is_config_error() {
        let err = MusclestoreConfig::default()
            .resolve_today_from(Some("15.03.2024"), date(2030, 1, 1))
            .unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(err.context_value("var"), Some(TODAY_ENV));
        assert_eq!(err.context_value("input"), Some("15.03.2024"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("[config] reference date must be YYYY-MM-DD"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a")), ConfigFormat::Yaml);
    }
}
