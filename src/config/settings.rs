//! User settings for Mind Reframe
//!
//! Presentation timings only. Nothing the user writes in the wizard is ever
//! stored here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ReframePaths;
use crate::error::ReframeError;

/// User settings for Mind Reframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the splash screen is shown at startup
    #[serde(default = "default_show_splash")]
    pub show_splash: bool,

    /// How long the splash screen stays up, in milliseconds
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,

    /// Event loop tick rate, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long toast notifications stay up, in seconds
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_show_splash() -> bool {
    true
}

fn default_splash_duration_ms() -> u64 {
    4000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            show_splash: default_show_splash(),
            splash_duration_ms: default_splash_duration_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Settings {
    /// Splash duration as a `Duration`
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    /// Tick rate as a `Duration` (never zero)
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &ReframePaths) -> Result<Self, ReframeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReframeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReframeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReframePaths) -> Result<(), ReframeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReframeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReframeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
