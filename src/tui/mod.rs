//! Terminal User Interface module
//!
//! This module provides the wizard TUI using ratatui: a splash screen that
//! gives way to a six-step card, a status bar, toasts and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
