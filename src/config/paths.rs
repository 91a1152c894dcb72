//! Path management for Mind Reframe
//!
//! Only settings and logs live on disk; answers are never written anywhere.
//!
//! ## Path Resolution Order
//!
//! 1. `REFRAME_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/mind-reframe` or `~/.config/mind-reframe`
//! 3. Windows: `%APPDATA%\mind-reframe`

use std::path::PathBuf;

use crate::error::ReframeError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "REFRAME_CONFIG_DIR";

/// Manages all paths used by Mind Reframe
#[derive(Debug, Clone)]
pub struct ReframePaths {
    base_dir: PathBuf,
}

impl ReframePaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/appdata directory can be determined.
    pub fn new() -> Result<Self, ReframeError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReframePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/mind-reframe/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("reframe.log")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), ReframeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReframeError::Io(format!("Failed to create config directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| ReframeError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReframeError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ReframeError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("mind-reframe"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReframeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReframeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("mind-reframe"))
}
