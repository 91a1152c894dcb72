//! Layout definitions for the TUI
//!
//! The screen is a centered card above a one-line status bar. The card is
//! split into header, progress gauge, prompt, input and action rows.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum card width, in columns
const CARD_MAX_WIDTH: u16 = 80;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout inside the wizard card
pub struct CardLayout {
    /// "Step N of 6" line
    pub header: Rect,
    /// Progress gauge
    pub progress: Rect,
    /// Question text
    pub prompt: Rect,
    /// Text editor or slider
    pub input: Rect,
    /// Next/Complete button
    pub action: Rect,
}

impl CardLayout {
    /// Calculate the card layout from the card's inner area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Prompt
                Constraint::Min(3),    // Input
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Action
            ])
            .split(area);

        Self {
            header: chunks[0],
            progress: chunks[2],
            prompt: chunks[4],
            input: chunks[5],
            action: chunks[7],
        }
    }
}

/// Area for the wizard card: centered, at most `CARD_MAX_WIDTH` wide
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    let height = area.height.min(18);
    centered_rect_fixed(width, height, area)
}

/// Area for a toast in the top-right corner
pub fn toast_area(area: Rect) -> Rect {
    let width = area.width.min(44);
    let height = area.height.min(4);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
