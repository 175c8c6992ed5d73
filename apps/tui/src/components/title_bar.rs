//! Title bar component for the terminal window.
//!
//! Traffic-light dots on the left, the session title in the middle and the
//! active language on the right.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use termfolio_core::Locale;

use crate::theme::TermTheme;

/// `user@host-portfolio ~ terminal`.
pub fn window_title(user: &str, host: &str) -> String {
    format!("{}@{}-portfolio ~ terminal", user, host)
}

/// Renders the title bar with a bottom border.
pub fn render_title_bar(frame: &mut Frame, area: Rect, theme: &TermTheme, title: &str, locale: Locale) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.gray))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Fill(1), Constraint::Length(8)])
        .split(inner);

    let dots = Line::from(vec![
        Span::styled("● ", Style::default().fg(theme.red)),
        Span::styled("● ", Style::default().fg(theme.yellow)),
        Span::styled("●", Style::default().fg(theme.green)),
    ]);
    frame.render_widget(Paragraph::new(dots).alignment(Alignment::Left), chunks[0]);

    let title = Paragraph::new(Span::styled(title.to_string(), Style::default().fg(theme.gray)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let lang = Paragraph::new(Span::styled(
        locale.code().to_uppercase(),
        Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(lang, chunks[2]);
}
