use std::{
    io::{self, Write},
    ops::{Deref, DerefMut},
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Raw mode plus alternate screen on `out`. Dropping it leaves both, so any
/// step failing after [`ScreenGuard::enter`] still hands the terminal back.
struct ScreenGuard<W: Write> {
    out: W,
}

impl<W: Write> ScreenGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, LeaveAlternateScreen) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
        tracing::debug!("terminal restored");
    }
}

/// Runs `build` while `guard` holds the screen. On error the guard is dropped
/// before the error is returned.
fn hold<W: Write, T>(
    guard: ScreenGuard<W>,
    build: impl FnOnce() -> io::Result<T>,
) -> Result<(ScreenGuard<W>, T)> {
    let value = build()?;
    Ok((guard, value))
}

/// Owns the terminal for the lifetime of a pick.
///
/// Drawing goes to stderr so stdout stays free for the selected candidate.
/// Raw mode and the alternate screen are released when the session is
/// dropped, whichever way the finder exits.
pub struct TuiSession {
    // dropped before the screen guard
    terminal: Terminal<CrosstermBackend<io::Stderr>>,
    _screen: ScreenGuard<io::Stderr>,
}

impl TuiSession {
    pub fn new() -> Result<Self> {
        let screen = ScreenGuard::enter(io::stderr())?;
        let (screen, terminal) = hold(screen, || {
            Terminal::new(CrosstermBackend::new(io::stderr()))
        })?;
        tracing::debug!("terminal acquired");
        Ok(Self {
            terminal,
            _screen: screen,
        })
    }
}

impl Deref for TuiSession {
    type Target = Terminal<CrosstermBackend<io::Stderr>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TuiSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!(%err, "failed to show cursor");
        }
    }
}
