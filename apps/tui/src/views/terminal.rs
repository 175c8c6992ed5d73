//! The terminal window: title bar, scrollback and the incident panel.

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use termfolio_core::Shell;

use crate::components::{render_incident_alert, render_title_bar};
use crate::screen::Screen;
use crate::theme::TermTheme;
use crate::views::WindowLayout;

/// Draws one frame.
pub fn render_window(
    frame: &mut Frame,
    shell: &Shell,
    screen: &Screen,
    theme: &TermTheme,
    title: &str,
    now: DateTime<Utc>,
) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let [title_area, body] = WindowLayout::create(area);
    let locale = shell.session().locale();
    render_title_bar(frame, title_area, theme, title, locale);

    let body = WindowLayout::padded(body);
    let height = usize::from(body.height);
    let scrollback = Paragraph::new(screen.visible_lines(theme, height)).style(theme.base());
    frame.render_widget(scrollback, body);

    if let Some((col, row)) = screen.cursor(height) {
        if col < body.width {
            frame.set_cursor_position(Position::new(body.x + col, body.y + row));
        }
    }

    render_incident_alert(frame, body, shell.session().incidents(), now, theme, locale);
}
