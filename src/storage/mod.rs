//! Storage module for preferences and configuration.

pub mod config;
pub mod database;
pub mod preferences;
pub mod schema;

pub use config::{AppConfig, ConfigError, QuoteSettings, SessionSettings, StatsSettings, ThemeMode};
pub use database::{Database, DatabaseError};
pub use preferences::{keys, MemoryPreferenceStore, PrefValue, PreferenceStore, Preferences};
