//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: splash, help overlay, text step or slider step.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        // Nothing to update; the next draw picks up the hidden gate
        Event::SplashHidden => Ok(()),
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::InputClosed(reason) => {
            app.quit();
            anyhow::bail!("terminal input closed: {}", reason)
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Any key closes help, Esc included
    if app.show_help {
        app.toggle_help();
        return Ok(());
    }

    // Quit works everywhere else, including the splash
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        _ => {}
    }

    if !app.wizard_visible() {
        return Ok(());
    }

    match key.code {
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Enter => {
            app.primary_action();
            return Ok(());
        }
        _ => {}
    }

    if app.wizard.step().field().is_text() {
        handle_text_key(app, key)
    } else {
        handle_slider_key(app, key)
    }
}

/// Handle keys on a free-text step
fn handle_text_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_text(|input| input.insert(c))?;
        }
        KeyCode::Backspace => app.edit_text(|input| input.backspace())?,
        KeyCode::Delete => app.edit_text(|input| input.delete())?,
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }

    Ok(())
}

/// Handle keys on the intensity slider step
fn handle_slider_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let (min, max) = app.intensity_bounds();

    match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('h') => {
            app.adjust_intensity(-1)
        }
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            app.adjust_intensity(1)
        }
        KeyCode::Home => app.set_intensity(min)?,
        KeyCode::End => app.set_intensity(max)?,
        KeyCode::Char('0') => app.set_intensity(10)?,
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                app.set_intensity(digit as u8)?;
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::splash::SplashGate;
    use crate::wizard::Step;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, press(KeyCode::Char(c))).unwrap();
        }
    }

    fn wizard_app() -> App {
        App::new(Settings::default(), SplashGate::hidden())
    }

    #[test]
    fn test_splash_swallows_keys() {
        let mut app = App::new(Settings::default(), SplashGate::shown());
        type_text(&mut app, "hello");
        handle_event(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.wizard.record().situation, "");
        assert_eq!(app.wizard.step(), Step::Situation);
        assert!(!app.should_quit);

        handle_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = wizard_app();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.wizard.record().situation, "");
    }

    #[test]
    fn test_typing_and_editing() {
        let mut app = wizard_app();
        type_text(&mut app, "Missed deadlinx");
        handle_event(&mut app, press(KeyCode::Backspace)).unwrap();
        type_text(&mut app, "e");
        assert_eq!(app.wizard.record().situation, "Missed deadline");

        handle_event(&mut app, press(KeyCode::Home)).unwrap();
        handle_event(&mut app, press(KeyCode::Delete)).unwrap();
        assert_eq!(app.wizard.record().situation, "issed deadline");
    }

    #[test]
    fn test_help_overlay_captures_next_key() {
        let mut app = wizard_app();
        handle_event(&mut app, press(KeyCode::F(1))).unwrap();
        assert!(app.show_help);
        type_text(&mut app, "x");
        assert!(!app.show_help);
        assert_eq!(app.wizard.record().situation, "");
    }

    #[test]
    fn test_esc_on_help_only_closes_overlay() {
        let mut app = wizard_app();
        type_text(&mut app, "Missed deadline");
        handle_event(&mut app, press(KeyCode::F(1))).unwrap();
        assert!(app.show_help);

        handle_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(!app.show_help);
        assert!(!app.should_quit);
        assert_eq!(app.wizard.record().situation, "Missed deadline");

        handle_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_slider_keys() {
        let mut app = wizard_app();
        for _ in 0..2 {
            type_text(&mut app, "x");
            handle_event(&mut app, press(KeyCode::Enter)).unwrap();
        }
        assert_eq!(app.wizard.step(), Step::EmotionIntensity);

        handle_event(&mut app, press(KeyCode::Right)).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 6);
        handle_event(&mut app, press(KeyCode::Char('-'))).unwrap();
        handle_event(&mut app, press(KeyCode::Char('-'))).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 4);
        handle_event(&mut app, press(KeyCode::Char('0'))).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 10);
        handle_event(&mut app, press(KeyCode::Right)).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 10);
        handle_event(&mut app, press(KeyCode::Home)).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 1);
        handle_event(&mut app, press(KeyCode::Char('8'))).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 8);
        handle_event(&mut app, press(KeyCode::Up)).unwrap();
        handle_event(&mut app, press(KeyCode::Char('l'))).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 10);
        handle_event(&mut app, press(KeyCode::Down)).unwrap();
        handle_event(&mut app, press(KeyCode::Char('h'))).unwrap();
        handle_event(&mut app, press(KeyCode::Char('='))).unwrap();
        assert_eq!(app.wizard.record().emotion_intensity, 9);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = wizard_app();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert_eq!(app.wizard.record().situation, "");
    }

    #[test]
    fn test_input_closed_is_error() {
        let mut app = wizard_app();
        assert!(handle_event(&mut app, Event::InputClosed("gone".into())).is_err());
        assert!(app.should_quit);
    }
}
