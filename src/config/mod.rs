//! Configuration module for Mind Reframe
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReframePaths;
pub use settings::Settings;
