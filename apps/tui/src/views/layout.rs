//! Window layout: title bar on top, scrollback below.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    prelude::*,
};

/// Layout of the terminal window.
pub struct WindowLayout;

impl WindowLayout {
    /// Title bar (1 line + border) and body.
    pub fn create(area: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Min(0),    // Scrollback
            ])
            .split(area);
        [chunks[0], chunks[1]]
    }

    /// Body with one column of padding on each side.
    pub fn padded(body: Rect) -> Rect {
        Rect {
            x: body.x.saturating_add(1),
            y: body.y,
            width: body.width.saturating_sub(2),
            height: body.height,
        }
    }
}
