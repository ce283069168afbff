//! Cross-platform configuration module
//!
//! Handles loading and saving configuration across all platforms.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use super::error::AppResult;
use crate::i18n::{Language, LanguagePreference};

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub daily_limit_minutes: u64,
    pub postpone_minutes: u64,
    #[serde(default)]
    pub insist_break: bool,
    #[serde(default = "default_ignorable")]
    pub ignorable: bool,
    #[serde(default)]
    pub language: LanguagePreference,
    /// Extra directory searched for icons before the built-in locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_dir: Option<PathBuf>,
}

const fn default_ignorable() -> bool {
    true
}

impl Config {
    pub const DEFAULT_DAILY_LIMIT_MINUTES: u64 = 240;
    pub const DEFAULT_POSTPONE_MINUTES: u64 = 10;

    pub const MIN_DAILY_LIMIT_MINUTES: u64 = 1;
    pub const MAX_DAILY_LIMIT_MINUTES: u64 = 24 * 60;

    pub const MIN_POSTPONE_MINUTES: u64 = 1;
    pub const MAX_POSTPONE_MINUTES: u64 = 120;

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("breakgap");
            path.push("config.json");
            path
        })
    }

    /// Load configuration from disk (or use defaults)
    pub fn load() -> Self {
        Self::config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("no config at {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(config) => Self::validate(config),
            Err(e) => {
                warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> AppResult<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate and clamp config values to valid ranges
    pub fn validate(mut config: Self) -> Self {
        config.daily_limit_minutes = config
            .daily_limit_minutes
            .clamp(Self::MIN_DAILY_LIMIT_MINUTES, Self::MAX_DAILY_LIMIT_MINUTES);
        config.postpone_minutes = config
            .postpone_minutes
            .clamp(Self::MIN_POSTPONE_MINUTES, Self::MAX_POSTPONE_MINUTES);
        config
    }

    pub fn effective_language(&self) -> Language {
        self.language.resolve()
    }

    pub const fn daily_limit(&self) -> Duration {
        Duration::from_secs(self.daily_limit_minutes.saturating_mul(60))
    }

    pub const fn postpone_duration(&self) -> Duration {
        Duration::from_secs(self.postpone_minutes.saturating_mul(60))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_limit_minutes: Self::DEFAULT_DAILY_LIMIT_MINUTES,
            postpone_minutes: Self::DEFAULT_POSTPONE_MINUTES,
            insist_break: false,
            ignorable: true,
            language: LanguagePreference::Auto,
            icon_dir: None,
        }
    }
}
