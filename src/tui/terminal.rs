//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash,
//! and runs the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::splash::{SplashGate, SplashTimer};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, settings);
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, settings: Settings) -> Result<()> {
    let events = EventHandler::new(settings.tick_rate());

    let splash = if settings.show_splash {
        SplashGate::shown()
    } else {
        SplashGate::hidden()
    };

    // Dropped when the loop exits, which cancels a still-pending timer
    let _splash_timer = settings.show_splash.then(|| {
        let sender = events.sender();
        SplashTimer::start(splash.clone(), settings.splash_duration(), move || {
            let _ = sender.send(Event::SplashHidden);
        })
    });

    info!(
        splash = settings.show_splash,
        splash_ms = settings.splash_duration_ms,
        "tui started"
    );

    let mut app = App::new(settings, splash);

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        let event = events.next()?;
        if let Event::SplashHidden = event {
            debug!("splash hidden, showing wizard");
        }
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    info!(step = app.wizard.step().number(), "tui exited");
    Ok(())
}
