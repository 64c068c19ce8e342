/// A logical input event, already decoded from whatever raw key the shell saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Printable character appended to the query.
    Char(char),
    /// Remove the last query character.
    Erase,
    Up,
    Down,
    Confirm,
    Cancel,
}

/// Where a session pulls its input from.
pub trait InputSource {
    /// Blocks until the next raw input arrives. `Ok(None)` means nothing the
    /// session cares about happened (a resize, an unbound key) and the
    /// current state should simply be drawn again.
    fn next_event(&mut self) -> anyhow::Result<Option<Event>>;
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn next_event(&mut self) -> anyhow::Result<Option<Event>> {
        (**self).next_event()
    }
}
