//! Layout helpers shared by the handlers.

use crate::output::{Color, Line, Span, Style};

/// Width of a skill bar in cells; one cell per 5%.
pub(super) const BAR_WIDTH: usize = 20;

/// Pads `text` with spaces to `width` characters. Longer text is left as is.
pub(super) fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// A dimmed horizontal rule.
pub(super) fn rule(width: usize) -> Line {
    Line::from(Span::dim("─".repeat(width)))
}

/// Blank line, bold cyan title, rule, blank line.
pub(super) fn section(title: &str, rule_width: usize) -> Vec<Line> {
    vec![
        Line::blank(),
        Line::styled(title, Style::fg(Color::Cyan).bold()),
        rule(rule_width),
        Line::blank(),
    ]
}

/// A bold header row for a table.
pub(super) fn table_header(columns: &[(&str, usize)]) -> Line {
    let text: String = columns.iter().map(|(name, width)| pad(name, *width)).collect();
    Line::styled(text.trim_end().to_string(), Style::fg(Color::White).bold())
}

/// `█` for every full 5%, `░` for the rest.
pub(super) fn skill_bar(level: u8) -> String {
    let filled = (usize::from(level.min(100)) / 5).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        assert_eq!(pad("ñu", 3), "ñu ");
    }

    #[test]
    fn test_skill_bar() {
        assert_eq!(skill_bar(0), "░".repeat(20));
        assert_eq!(skill_bar(100), "█".repeat(20));
        let bar = skill_bar(88);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 17);
        assert_eq!(bar.chars().count(), 20);
    }

    #[test]
    fn test_table_header_trims() {
        let line = table_header(&[("NAME", 6), ("AGE", 6)]);
        assert_eq!(line.plain(), "NAME  AGE");
    }
}
