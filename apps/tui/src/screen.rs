//! Scrollback buffer behind the terminal window.

use termfolio_core::{Line, Sink, Transcript};
use unicode_width::UnicodeWidthStr;

use crate::theme::TermTheme;

/// Lines moved per PageUp/PageDown.
pub const SCROLL_STEP: usize = 10;

/// A bounded transcript plus a scroll position.
///
/// `scroll` counts rows up from the bottom; any new output snaps back down.
#[derive(Debug, Clone)]
pub struct Screen {
    transcript: Transcript,
    scroll: usize,
}

impl Screen {
    pub fn new(max_lines: usize) -> Self {
        Self { transcript: Transcript::with_max_lines(max_lines), scroll: 0 }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Total rows including the live prompt row.
    pub fn row_count(&self) -> usize {
        self.transcript.lines().len() + usize::from(self.transcript.live_line().is_some())
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = (self.scroll + rows).min(self.row_count().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn take_navigation_request(&mut self) -> bool {
        self.transcript.take_navigation_request()
    }

    /// The rows that fit in `height`, honoring the scroll position.
    pub fn visible_lines(&self, theme: &TermTheme, height: usize) -> Vec<ratatui::text::Line<'static>> {
        let live = self.transcript.live_line();
        let all: Vec<&Line> = self.transcript.lines().iter().chain(live.as_ref()).collect();
        let end = all.len().saturating_sub(self.scroll);
        let start = end.saturating_sub(height);
        all[start..end].iter().map(|line| theme.line(line)).collect()
    }

    /// Cursor position within a `height`-row viewport: column after the
    /// live row's text and the row it sits on. `None` when scrolled away.
    pub fn cursor(&self, height: usize) -> Option<(u16, u16)> {
        if self.scroll > 0 || height == 0 {
            return None;
        }
        let live = self.transcript.live_line()?;
        let col = live.plain().width();
        let row = self.row_count().min(height) - 1;
        Some((u16::try_from(col).unwrap_or(u16::MAX), u16::try_from(row).unwrap_or(u16::MAX)))
    }
}

impl Sink for Screen {
    fn echo(&mut self, text: &str) {
        self.scroll = 0;
        self.transcript.echo(text);
    }

    fn erase(&mut self, count: usize) {
        self.transcript.erase(count);
    }

    fn write_lines(&mut self, lines: &[Line]) {
        self.scroll = 0;
        self.transcript.write_lines(lines);
    }

    fn prompt(&mut self, prompt: &Line, buffer: &str) {
        self.scroll = 0;
        self.transcript.prompt(prompt, buffer);
    }

    fn replace_input(&mut self, prompt: &Line, buffer: &str) {
        self.transcript.replace_input(prompt, buffer);
    }

    fn clear(&mut self) {
        self.scroll = 0;
        self.transcript.clear();
    }

    fn navigate_away(&mut self) {
        self.transcript.navigate_away();
    }
}
