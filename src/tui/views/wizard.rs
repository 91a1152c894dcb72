//! Wizard card view
//!
//! Draws the current step from its [`StepView`]: header with the step icon,
//! progress gauge, prompt, the text editor or slider, and the primary action.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::{card_area, CardLayout};
use crate::wizard::{PrimaryAction, StepIcon, StepInput};

use super::splash::TITLE;

/// Render the wizard card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = card_area(area);

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));

    let inner = block.inner(card);
    frame.render_widget(block, card);

    let layout = CardLayout::new(inner);
    let view = app.wizard.view();

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}: ", view.step),
            Style::default().fg(Color::White),
        ),
        Span::styled(view.icon.glyph(), icon_style(view.icon)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(header, layout.header);

    // Progress
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(app.wizard.progress())
        .label(format!("{}/6", view.step.number()));
    frame.render_widget(gauge, layout.progress);

    // Prompt
    let prompt = Paragraph::new(Span::styled(
        view.prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, layout.prompt);

    // Input
    match view.input {
        StepInput::Text { .. } => render_text_input(frame, app, layout.input),
        StepInput::Slider { value } => render_slider(frame, app, value, layout.input),
    }

    // Action
    render_action(frame, view.action, view.action_enabled, layout.action);
}

fn icon_style(icon: StepIcon) -> Style {
    match icon {
        StepIcon::Smile => Style::default().fg(Color::Yellow),
        StepIcon::Brain | StepIcon::Lightbulb => Style::default().fg(Color::LightRed),
    }
}

fn render_text_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(app.input.clone(), inner);
}

/// Slider track, e.g. `1 ━━━━━━━●─── 10`
fn slider_line(value: u8, min: u8, max: u8) -> Line<'static> {
    let mut filled = String::new();
    let mut empty = String::new();
    for position in min..=max {
        if position < value {
            filled.push_str("━━");
        } else if position > value {
            empty.push_str("──");
        }
    }

    Line::from(vec![
        Span::styled(format!("{} ", min), Style::default().fg(Color::DarkGray)),
        Span::styled(filled, Style::default().fg(Color::Magenta)),
        Span::styled(
            "●",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {}", max), Style::default().fg(Color::DarkGray)),
    ])
}

fn render_slider(frame: &mut Frame, app: &App, value: u8, area: Rect) {
    let (min, max) = app.intensity_bounds();
    let lines = vec![
        Line::from(""),
        slider_line(value, min, max),
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_action(frame: &mut Frame, action: PrimaryAction, enabled: bool, area: Rect) {
    let glyph = match action {
        PrimaryAction::Next => "→",
        PrimaryAction::Complete => "💡",
    };
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Green)),
        Span::styled(format!(" {} {} ", action, glyph), style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
