//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Wizard semantics live in [`WizardController`]; the App only mirrors the
//! current text field into a [`TextInput`] for editing.

use std::time::Duration;

use crate::config::settings::Settings;
use crate::error::ReframeResult;
use crate::splash::SplashGate;
use crate::wizard::record::{MAX_INTENSITY, MIN_INTENSITY};
use crate::wizard::{Field, WizardController};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Shown when a thought record is completed
pub const COMPLETION_MESSAGE: &str =
    "Great job! You've completed the cognitive restructuring process.";

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Splash visibility
    pub splash: SplashGate,

    /// The step state machine and its record
    pub wizard: WizardController,

    /// Editor for the current step's text field
    pub input: TextInput,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toasts
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, splash: SplashGate) -> Self {
        let mut app = Self {
            settings,
            splash,
            wizard: WizardController::new(),
            input: TextInput::new(),
            should_quit: false,
            show_help: false,
            status_message: None,
            notifications: NotificationQueue::new(),
        };
        app.sync_input();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Whether the wizard screen (not the splash) is showing
    pub fn wizard_visible(&self) -> bool {
        !self.splash.is_visible()
    }

    /// Reload the editor from the record for the current step
    fn sync_input(&mut self) {
        let step = self.wizard.step();
        let content = self.wizard.record().text(step.field()).unwrap_or_default();
        self.input = TextInput::new()
            .content(content)
            .placeholder(step.placeholder())
            .focused(true);
    }

    /// Apply an edit to the text input and write it through to the record
    pub fn edit_text(&mut self, edit: impl FnOnce(&mut TextInput)) -> ReframeResult<()> {
        let field = self.wizard.step().field();
        if !field.is_text() {
            return Ok(());
        }
        edit(&mut self.input);
        self.wizard
            .update_field(field, self.input.value().to_string())?;
        self.clear_status();
        Ok(())
    }

    /// Set the intensity slider
    pub fn set_intensity(&mut self, value: u8) -> ReframeResult<()> {
        self.wizard.update_field(Field::EmotionIntensity, value)
    }

    /// Nudge the intensity slider
    pub fn adjust_intensity(&mut self, delta: i8) {
        self.wizard.adjust_intensity(delta);
    }

    /// Trigger the Next/Complete button
    ///
    /// A disabled action only leaves a hint in the status bar.
    pub fn primary_action(&mut self) {
        let step = self.wizard.step();

        if step.is_last() {
            if self.wizard.complete().is_some() {
                self.notifications.push(
                    Notification::success(COMPLETION_MESSAGE)
                        .with_duration(Duration::from_secs(self.settings.notification_secs)),
                );
                self.clear_status();
                self.sync_input();
            } else {
                let field = step.field().to_string().to_lowercase();
                self.set_status(format!("Write a {} to complete", field));
            }
            return;
        }

        if self.wizard.advance() {
            self.clear_status();
            self.sync_input();
        } else {
            self.set_status("Answer this step to continue");
        }
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Slider bounds, for rendering
    pub fn intensity_bounds(&self) -> (u8, u8) {
        (MIN_INTENSITY, MAX_INTENSITY)
    }
}
