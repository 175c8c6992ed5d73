//! The display surface contract.
//!
//! A sink holds committed output plus one live row: the prompt followed by
//! whatever is being typed. Editing calls touch only the live row.

use crate::output::{Effect, Line, Reply, Span};

/// Where the shell paints.
pub trait Sink {
    /// Appends typed text to the live row.
    fn echo(&mut self, text: &str);

    /// Removes the last `count` characters typed on the live row.
    fn erase(&mut self, count: usize);

    /// Commits the live row (if any) and appends `lines` below it.
    fn write_lines(&mut self, lines: &[Line]);

    /// Commits the live row (if any) and starts a new one.
    fn prompt(&mut self, prompt: &Line, buffer: &str);

    /// Rewrites the live row in place.
    fn replace_input(&mut self, prompt: &Line, buffer: &str);

    /// Wipes all output, including the live row.
    fn clear(&mut self);

    /// Asks the host to leave the terminal. Must not block.
    fn navigate_away(&mut self);
}

/// Writes a reply and applies its effect.
pub fn present(reply: &Reply, sink: &mut dyn Sink) {
    if !reply.lines.is_empty() {
        sink.write_lines(&reply.lines);
    }
    match reply.effect {
        Some(Effect::ClearScreen) => sink.clear(),
        Some(Effect::NavigateAway) => sink.navigate_away(),
        None => {}
    }
}

#[derive(Debug, Clone)]
struct LiveRow {
    prompt: Line,
    input: String,
}

impl LiveRow {
    fn to_line(&self) -> Line {
        let mut line = self.prompt.clone();
        if !self.input.is_empty() {
            line.spans.push(Span::raw(self.input.clone()));
        }
        line
    }
}

/// An in-memory sink, used by `--exec` mode and tests.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<Line>,
    live: Option<LiveRow>,
    max_lines: Option<usize>,
    clears: usize,
    navigation_requested: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `max` committed lines, dropping the oldest.
    pub fn with_max_lines(max: usize) -> Self {
        Self { max_lines: Some(max.max(1)), ..Self::default() }
    }

    /// Committed lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The row currently being edited.
    pub fn live_line(&self) -> Option<Line> {
        self.live.as_ref().map(LiveRow::to_line)
    }

    /// Text typed on the live row.
    pub fn input(&self) -> Option<&str> {
        self.live.as_ref().map(|row| row.input.as_str())
    }

    /// Committed lines and the live row as plain strings.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().chain(self.live_line().as_ref()).map(Line::plain).collect()
    }

    pub fn plain_text(&self) -> String {
        self.plain_lines().join("\n")
    }

    /// Times the sink was wiped.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Returns and resets the pending navigation request.
    pub fn take_navigation_request(&mut self) -> bool {
        std::mem::take(&mut self.navigation_requested)
    }

    /// Drains committed lines, leaving the live row alone.
    pub fn take_lines(&mut self) -> Vec<Line> {
        std::mem::take(&mut self.lines)
    }

    fn commit_live(&mut self) {
        if let Some(row) = self.live.take() {
            self.push(row.to_line());
        }
    }

    fn push(&mut self, line: Line) {
        self.lines.push(line);
        if let Some(max) = self.max_lines {
            if self.lines.len() > max {
                let excess = self.lines.len() - max;
                self.lines.drain(..excess);
            }
        }
    }
}

impl Sink for Transcript {
    fn echo(&mut self, text: &str) {
        self.live
            .get_or_insert_with(|| LiveRow { prompt: Line::blank(), input: String::new() })
            .input
            .push_str(text);
    }

    fn erase(&mut self, count: usize) {
        if let Some(row) = self.live.as_mut() {
            for _ in 0..count {
                if row.input.pop().is_none() {
                    break;
                }
            }
        }
    }

    fn write_lines(&mut self, lines: &[Line]) {
        self.commit_live();
        for line in lines {
            self.push(line.clone());
        }
    }

    fn prompt(&mut self, prompt: &Line, buffer: &str) {
        self.commit_live();
        self.live = Some(LiveRow { prompt: prompt.clone(), input: buffer.to_string() });
    }

    fn replace_input(&mut self, prompt: &Line, buffer: &str) {
        self.live = Some(LiveRow { prompt: prompt.clone(), input: buffer.to_string() });
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.live = None;
        self.clears += 1;
    }

    fn navigate_away(&mut self) {
        self.navigation_requested = true;
    }
}
