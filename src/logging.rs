//! Log file setup
//!
//! The TUI owns stdout, so tracing output goes to a file under the config
//! directory. If no log file can be opened, logging is dropped rather than
//! written to the terminal. The filter comes from `RUST_LOG` (default `info`).
//!
//! Answers typed into the wizard are never logged; events carry step numbers
//! and lengths only.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::paths::ReframePaths;

/// Install the global tracing subscriber
///
/// Returns the log file path when file logging is active.
pub fn init_tracing(paths: &ReframePaths) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (log_file, warnings) = open_log_file(paths);

    if let Some((log_path, file)) = log_file {
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .try_init()
            .is_ok();

        if installed {
            tracing::info!(path = %log_path.display(), "Logging initialized");
            for warning in warnings {
                tracing::warn!("{warning}");
            }
            return Some(log_path);
        }
        return None;
    }

    let _ = tracing_subscriber::registry().with(env_filter).try_init();
    None
}

fn open_log_file(paths: &ReframePaths) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates(paths) {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

fn log_file_candidates(paths: &ReframePaths) -> Vec<PathBuf> {
    vec![
        paths.log_file(),
        // Fallback for read-only config dirs
        std::env::temp_dir().join("mind-reframe").join("reframe.log"),
    ]
}
