//! Mind Reframe - terminal cognitive restructuring journal
//!
//! A six-step guided exercise: describe a situation, name the automatic
//! thought, rate the emotion, weigh the evidence for and against, and write a
//! balanced perspective. Completing the last step clears the record and starts
//! over. Nothing the user writes is stored.
//!
//! # Architecture
//!
//! - `wizard`: step state machine, thought record, per-step views
//! - `splash`: one-shot splash gate with a cancel-on-drop timer
//! - `tui`: ratatui front end (event loop, views, widgets)
//! - `config`: path resolution and user settings
//! - `logging`: tracing subscriber writing to a log file
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use reframe::wizard::{Field, WizardController};
//!
//! let mut wizard = WizardController::new();
//! assert!(!wizard.advance());
//! wizard.update_field(Field::Situation, "Missed deadline").unwrap();
//! assert!(wizard.advance());
//! assert_eq!(wizard.step().number(), 2);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod splash;
pub mod tui;
pub mod wizard;

pub use error::{ReframeError, ReframeResult};
