use anyhow::Result;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Terminal,
};
use sift_core::{format_for_display, Dimensions, Frame, Renderer};

use crate::widgets::{footer, match_count};

const HIGHLIGHT_SYMBOL: &str = "❯ ";
const HIGHLIGHT_WIDTH: u16 = 2;

/// Draws finder frames onto a ratatui terminal: search box on top, matches in
/// the middle, key hints at the bottom.
///
/// A terminal shorter than 7 lines has no room for a single candidate row, so
/// [`Renderer::dimensions`] fails with `invalid dimensions` and the pick ends
/// with that error, also when the terminal is shrunk mid-pick.
pub struct TerminalRenderer<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
}

impl<'t, B: Backend> TerminalRenderer<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self { terminal }
    }
}

fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

impl<B: Backend> Renderer for TerminalRenderer<'_, B> {
    fn dimensions(&mut self) -> Result<Dimensions> {
        let size = self.terminal.size()?;
        let (_, list, _) = split(Rect::new(0, 0, size.width, size.height));

        // borders on both sides, plus the highlight symbol on the left
        let rows = list.height.saturating_sub(2);
        let width = list.width.saturating_sub(2 + HIGHLIGHT_WIDTH);
        Ok(Dimensions::new(rows.into(), width.into())?)
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.terminal.draw(|f| {
            let (search_area, list_area, footer_area) = split(f.area());

            let display_query = if frame.query.is_empty() {
                Span::styled(
                    "type to search...",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::raw(frame.query)
            };

            let search = Paragraph::new(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Yellow)),
                display_query,
            ]))
            .block(Block::default().title(frame.prompt).borders(Borders::ALL));
            f.render_widget(search, search_area);

            let items: Vec<ListItem> = frame
                .rows
                .iter()
                .map(|row| ListItem::new(format_for_display(row.text, frame.width)))
                .collect();
            let mut list_state =
                ListState::default().with_selected(frame.rows.iter().position(|r| r.selected));
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(match_count(frame.matched, frame.total))
                        .borders(Borders::ALL),
                )
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_stateful_widget(list, list_area, &mut list_state);

            f.render_widget(footer(), footer_area);
        })?;

        Ok(())
    }
}
