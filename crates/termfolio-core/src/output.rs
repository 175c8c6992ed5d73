//! Styled output produced by command handlers.
//!
//! Handlers never emit escape sequences. They build [`Line`]s out of
//! [`Span`]s carrying a small [`Style`], and the sink decides how to paint
//! them (ratatui widgets, ANSI on stdout, or plain text in tests).

/// The fixed palette every sink understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

/// Style tag attached to a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color, `None` for the sink's default.
    pub color: Option<Color>,
    /// Emphasis.
    pub bold: bool,
    /// Dimmed text.
    pub dim: bool,
}

impl Style {
    /// Unstyled text.
    pub const fn plain() -> Self {
        Self { color: None, bold: false, dim: false }
    }

    /// Colored text.
    pub const fn fg(color: Color) -> Self {
        Self { color: Some(color), bold: false, dim: false }
    }

    /// Adds emphasis.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Adds dimming.
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::plain() }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self::styled(text, Style::fg(color))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::styled(text, Style::plain().dim())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, Style::plain().bold())
    }
}

/// One output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A line with a single unstyled span.
    pub fn raw(text: impl Into<String>) -> Self {
        Self { spans: vec![Span::raw(text)] }
    }

    /// A line with a single styled span.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self { spans: vec![Span::styled(text, style)] }
    }

    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        Self { spans: spans.into_iter().collect() }
    }

    /// Appends a span, builder style.
    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// The text of the line with all styling dropped.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

/// Instructions for the sink beyond appending lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Wipe all displayed output.
    ClearScreen,
    /// Leave the terminal (the sink decides how and when).
    NavigateAway,
}

/// Everything a single dispatch produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<Line>,
    pub effect: Option<Effect>,
}

impl Reply {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines, effect: None }
    }

    /// A reply that shows nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A reply made of one line.
    pub fn line(line: impl Into<Line>) -> Self {
        Self::new(vec![line.into()])
    }

    pub fn clear_screen() -> Self {
        Self { lines: Vec::new(), effect: Some(Effect::ClearScreen) }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// All lines joined with newlines, styling dropped.
    pub fn plain_text(&self) -> String {
        self.lines.iter().map(Line::plain).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_plain_drops_styles() {
        let line = Line::from_spans([
            Span::colored("fabian@sre", Color::Green),
            Span::raw(":"),
            Span::colored("~", Color::Cyan),
            Span::raw("$ "),
        ]);
        assert_eq!(line.plain(), "fabian@sre:~$ ");
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Cyan).bold();
        assert_eq!(style.color, Some(Color::Cyan));
        assert!(style.bold);
        assert!(!style.dim);
        assert!(Style::plain().dim().dim);
    }

    #[test]
    fn test_blank_line() {
        assert!(Line::blank().is_blank());
        assert!(Line::raw("").is_blank());
        assert!(!Line::raw("x").is_blank());
    }

    #[test]
    fn test_reply_plain_text() {
        let reply = Reply::new(vec![Line::raw("one"), Line::blank(), Line::raw("two")]);
        assert_eq!(reply.plain_text(), "one\n\ntwo");
        assert_eq!(reply.effect, None);
    }

    #[test]
    fn test_clear_screen_reply() {
        let reply = Reply::clear_screen();
        assert!(reply.lines.is_empty());
        assert_eq!(reply.effect, Some(Effect::ClearScreen));
    }
}
