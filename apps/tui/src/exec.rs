//! Non-interactive mode: run command lines and print the replies.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{Attribute, Color, ContentStyle};
use tracing::debug;

use termfolio_core::{Line, Shell, output};

fn ansi_color(color: output::Color) -> Color {
    match color {
        output::Color::Red => Color::Red,
        output::Color::Green => Color::Green,
        output::Color::Yellow => Color::Yellow,
        output::Color::Blue => Color::Blue,
        output::Color::Magenta => Color::Magenta,
        output::Color::Cyan => Color::Cyan,
        output::Color::White => Color::White,
        output::Color::Gray => Color::Grey,
    }
}

fn content_style(style: output::Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.color.map(ansi_color);
    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.dim {
        content.attributes.set(Attribute::Dim);
    }
    content
}

/// Writes one line, with ANSI styling unless `plain`.
pub fn write_line<W: Write>(out: &mut W, line: &Line, plain: bool) -> std::io::Result<()> {
    for span in &line.spans {
        if plain || span.style == output::Style::plain() {
            write!(out, "{}", span.text)?;
        } else {
            write!(out, "{}", content_style(span.style).apply(span.text.as_str()))?;
        }
    }
    writeln!(out)
}

/// Runs each line through the dispatcher and prints its reply.
///
/// Screen effects (`clear`, `exit`) have nothing to act on here and are
/// skipped; their text is still printed. A resolved incident is acknowledged
/// straight away since there is no alert panel to close.
pub fn run_lines<W: Write>(shell: &mut Shell, lines: &[String], plain: bool, out: &mut W) -> Result<()> {
    for line in lines {
        let reply = shell.execute(line);
        debug!(line = %line, rows = reply.lines.len(), effect = ?reply.effect, "exec");
        for row in &reply.lines {
            write_line(out, row, plain).context("Failed to write output")?;
        }
        shell.acknowledge_incident();
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}
