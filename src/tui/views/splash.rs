//! Splash screen view

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Brand title
pub const TITLE: &str = "Mind Reframe";

/// Tagline under the title
pub const TAGLINE: &str = "A Cognitive-Restructuring Tool to help you reshape your thoughts \
     and your mind. Your journey to cognitive clarity starts here.";

/// Render the splash screen
pub fn render(frame: &mut Frame, area: Rect) {
    let content = centered_rect_fixed(area.width.min(60), area.height.min(9), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Logo
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Min(2),    // Tagline
        ])
        .split(content);

    let logo = Paragraph::new(Line::from(Span::styled(
        "( 🧠 )",
        Style::default().fg(Color::LightRed),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(logo, chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[2]);

    let tagline = Paragraph::new(TAGLINE)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(tagline, chunks[4]);
}
