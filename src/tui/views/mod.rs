//! TUI Views module
//!
//! The splash screen, the wizard card and the status bar, plus the overlays
//! drawn on top of them.

pub mod splash;
pub mod status_bar;
pub mod wizard;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::{toast_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    if app.wizard_visible() {
        wizard::render(frame, app, layout.main);
    } else {
        splash::render(frame, layout.main);
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(NotificationWidget::new(notification), toast_area(layout.main));
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}
