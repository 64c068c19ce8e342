use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: [(&str, &str); 3] = [("↑↓", "navigate"), ("↵", "select"), ("esc", "quit")];

/// One-line footer with the version and key hints.
pub fn footer<'a>() -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled(
            format!(" sift v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" |"),
    ];

    for (key, label) in KEY_HINTS {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {} ", label)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Title for the result list, e.g. ` 3/11 `.
pub fn match_count(matched: usize, total: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(matched.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("/{} ", total), Style::default().fg(Color::DarkGray)),
    ])
}
