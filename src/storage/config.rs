//! Application configuration and theme preference.
//!
//! Configuration lives in `config.toml` under the platform data directory.
//! A missing file yields the defaults; it is only written on request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// UI theme preference.
///
/// Stored in preferences as an integer code: 1 light, 2 dark, -1 follow system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow the operating system (default)
    #[default]
    System,
}

impl ThemeMode {
    /// Integer code used in the preference store.
    pub fn code(&self) -> i64 {
        match self {
            ThemeMode::Light => 1,
            ThemeMode::Dark => 2,
            ThemeMode::System => -1,
        }
    }

    /// Decode a stored code; unknown codes follow the system.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ThemeMode::Light,
            2 => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::System => write!(f, "System"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ConfigError::ParseError(format!(
                "unknown theme '{}', expected light, dark or system",
                other
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Statistics settings
    #[serde(default)]
    pub stats: StatsSettings,
    /// Startup quote settings
    #[serde(default)]
    pub quotes: QuoteSettings,
    /// Session settings
    #[serde(default)]
    pub session: SessionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            stats: StatsSettings::default(),
            quotes: QuoteSettings::default(),
            session: SessionSettings::default(),
        }
    }
}

impl AppConfig {
    /// Path of the preference database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("fitnessdaily.db")
    }
}

/// Statistics-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSettings {
    /// Rolling window for summaries, in days
    pub window_days: u32,
    /// Daily maintenance calories used for the deficit estimate
    pub maintenance_calories: u32,
    /// Workouts per week counted as 100% weekly progress
    pub weekly_workout_target: u32,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            window_days: 30,
            maintenance_calories: 2000,
            weekly_workout_target: 5,
        }
    }
}

/// Startup quote settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Show a motivational quote when a session starts
    pub enabled: bool,
    /// Minimum hours between startup quotes
    pub interval_hours: u32,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_hours: 3,
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Log sample workouts and meals when a session starts with empty lists
    pub seed_sample_data: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitnessdaily", "FitnessDaily")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load application configuration from `data_dir/config.toml`.
pub fn load_config_from(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join("config.toml");

    if !path.exists() {
        let config = AppConfig {
            data_dir: data_dir.to_path_buf(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir.to_path_buf();

    Ok(config)
}

/// Save application configuration into its data directory.
pub fn save_config(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let path = config.data_dir.join("config.toml");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(path)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_codes_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::from_code(mode.code()), mode);
        }
        assert_eq!(ThemeMode::from_code(42), ThemeMode::System);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.stats.window_days, 30);
        assert_eq!(config.stats.maintenance_calories, 2000);
        assert_eq!(config.quotes.interval_hours, 3);
        assert!(config.session.seed_sample_data);
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        config.stats.weekly_workout_target = 4;
        config.session.seed_sample_data = false;

        save_config(&config).unwrap();
        let loaded = load_config_from(dir.path()).unwrap();

        assert_eq!(loaded.stats.weekly_workout_target, 4);
        assert!(!loaded.session.seed_sample_data);
        assert_eq!(loaded.database_path(), dir.path().join("fitnessdaily.db"));
    }

    #[test]
    fn test_partial_config_fills_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "version = \"0.1.0\"\n").unwrap();

        let loaded = load_config_from(dir.path()).unwrap();
        assert_eq!(loaded.version, "0.1.0");
        assert_eq!(loaded.stats.window_days, 30);
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "version = [").unwrap();

        assert!(matches!(
            load_config_from(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
