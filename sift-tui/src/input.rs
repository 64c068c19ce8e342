use anyhow::{Context, Result};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sift_core::{Event, InputSource};

/// Reads key presses from the terminal.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn next_event(&mut self) -> Result<Option<Event>> {
        let raw = event::read().context("failed to read terminal input")?;
        Ok(match raw {
            event::Event::Key(key) => map_key(key),
            _ => None,
        })
    }
}

/// Translates a raw key into the finder's logical events.
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Event::Cancel),
        KeyCode::Char('p') if ctrl => Some(Event::Up),
        KeyCode::Char('n') if ctrl => Some(Event::Down),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) if !c.is_control() => Some(Event::Char(c)),
        KeyCode::Backspace => Some(Event::Erase),
        KeyCode::Up => Some(Event::Up),
        KeyCode::Down => Some(Event::Down),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Esc => Some(Event::Cancel),
        _ => None,
    }
}
