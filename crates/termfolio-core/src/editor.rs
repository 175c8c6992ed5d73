//! Single-line input editing with history recall and completion.

use tracing::trace;

use crate::history::{History, Recall};
use crate::output::{Line, Reply};
use crate::sink::{Sink, present};

/// Marker echoed when the line is cancelled.
pub const INTERRUPT_MARKER: &str = "^C";

/// A key event, already stripped of how it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A displayable character without Ctrl/Alt/Meta.
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+L.
    ClearScreen,
}

/// The input buffer, its history, and the prompt it is shown after.
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: String,
    history: History,
    prompt: Line,
}

impl LineEditor {
    pub fn new(prompt: Line, history_capacity: usize) -> Self {
        Self { buffer: String::new(), history: History::new(history_capacity), prompt }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn prompt(&self) -> &Line {
        &self.prompt
    }

    /// Starts a new live row with the prompt and the current buffer.
    pub fn show_prompt(&self, sink: &mut dyn Sink) {
        sink.prompt(&self.prompt, &self.buffer);
    }

    /// Appends a character. Control characters are ignored.
    pub fn on_printable(&mut self, ch: char, sink: &mut dyn Sink) {
        if ch.is_control() {
            return;
        }
        self.buffer.push(ch);
        let mut utf8 = [0u8; 4];
        sink.echo(ch.encode_utf8(&mut utf8));
    }

    pub fn on_backspace(&mut self, sink: &mut dyn Sink) {
        if self.buffer.pop().is_some() {
            sink.erase(1);
        }
    }

    /// Submits the buffer.
    ///
    /// Blank lines only re-prompt. Anything else is recorded in history
    /// before `dispatch` runs, so failures are recorded too.
    pub fn on_enter<F>(&mut self, sink: &mut dyn Sink, dispatch: F)
    where
        F: FnOnce(&str) -> Reply,
    {
        let line = std::mem::take(&mut self.buffer);
        if line.trim().is_empty() {
            self.show_prompt(sink);
            return;
        }

        self.history.push(line.clone());
        let reply = dispatch(&line);
        present(&reply, sink);
        self.show_prompt(sink);
    }

    pub fn on_history_up(&mut self, sink: &mut dyn Sink) {
        if let Some(entry) = self.history.back() {
            self.buffer = entry.to_string();
            sink.replace_input(&self.prompt, &self.buffer);
        }
    }

    /// Walks toward newer entries; past the newest the buffer is emptied.
    pub fn on_history_down(&mut self, sink: &mut dyn Sink) {
        match self.history.forward() {
            Recall::Entry(entry) => self.buffer = entry.to_string(),
            Recall::Fresh => self.buffer.clear(),
        }
        sink.replace_input(&self.prompt, &self.buffer);
    }

    /// Completes the buffer against `candidates` (lower-case names).
    ///
    /// One match is completed in place; several are listed and the prompt is
    /// shown again with the buffer untouched; none does nothing.
    pub fn on_tab(&mut self, candidates: &[&str], sink: &mut dyn Sink) {
        let prefix = self.buffer.to_lowercase();
        let matches: Vec<&str> =
            candidates.iter().copied().filter(|name| name.starts_with(&prefix)).collect();
        trace!(prefix = %prefix, matches = matches.len(), "tab completion");

        match matches.as_slice() {
            [] => {}
            [only] => {
                let rest = only.get(prefix.len()..).unwrap_or_default();
                if !rest.is_empty() {
                    self.buffer.push_str(rest);
                    sink.echo(rest);
                }
            }
            many => {
                sink.write_lines(&[Line::raw(many.join("  "))]);
                self.show_prompt(sink);
            }
        }
    }

    /// Ctrl+C: drops the buffer without submitting it.
    pub fn on_interrupt(&mut self, sink: &mut dyn Sink) {
        self.buffer.clear();
        self.history.reset_cursor();
        sink.echo(INTERRUPT_MARKER);
        self.show_prompt(sink);
    }

    /// Ctrl+L: wipes the sink, keeping the buffer.
    pub fn on_clear_screen(&mut self, sink: &mut dyn Sink) {
        sink.clear();
        self.show_prompt(sink);
    }
}
