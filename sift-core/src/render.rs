use crate::viewport::Dimensions;

/// One visible entry of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Position in the original candidate list.
    pub index: usize,
    /// Unformatted candidate text.
    pub text: &'a str,
    pub selected: bool,
}

/// Everything a renderer needs to draw one state of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    pub prompt: &'a str,
    pub query: &'a str,
    pub rows: Vec<Row<'a>>,
    pub matched: usize,
    pub total: usize,
    pub width: usize,
}

impl Frame<'_> {
    pub fn selected(&self) -> Option<&Row<'_>> {
        self.rows.iter().find(|row| row.selected)
    }
}

/// Draws session frames. Has no say in ordering or filtering; rows arrive
/// already windowed to the reported [`Dimensions`].
pub trait Renderer {
    fn dimensions(&mut self) -> anyhow::Result<Dimensions>;

    /// Draw `frame`, passing each row through
    /// [`format_for_display`](crate::format_for_display) with `frame.width`.
    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn dimensions(&mut self) -> anyhow::Result<Dimensions> {
        (**self).dimensions()
    }

    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        (**self).render(frame)
    }
}
