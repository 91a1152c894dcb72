//! Cognitive restructuring wizard
//!
//! The step state machine, the record it fills in, and the per-step view
//! derivation. Nothing here touches the terminal.

pub mod controller;
pub mod record;
pub mod step;

pub use controller::WizardController;
pub use record::{Field, FieldValue, ThoughtRecord};
pub use step::{step_view, PrimaryAction, Step, StepIcon, StepInput, StepView};
