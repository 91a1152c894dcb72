//! Overlays drawn above the wizard

pub mod help;
