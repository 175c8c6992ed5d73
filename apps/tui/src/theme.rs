//! Palette for the terminal window.

use anyhow::{Context, Result};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::warn;

use termfolio_core::output;

use crate::config::CustomColors;

/// Colors for every named shell color plus the window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermTheme {
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,
    pub gray: Color,
    pub background: Color,
}

impl Default for TermTheme {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl TermTheme {
    /// Dark navy window with neon accents.
    pub fn portfolio() -> Self {
        Self {
            red: Color::Rgb(0xff, 0x55, 0x55),
            green: Color::Rgb(0x4a, 0xde, 0x80),
            yellow: Color::Rgb(0xfb, 0xbf, 0x24),
            blue: Color::Rgb(0x60, 0xa5, 0xfa),
            magenta: Color::Rgb(0xc0, 0x84, 0xfc),
            cyan: Color::Rgb(0x22, 0xd3, 0xee),
            white: Color::Rgb(0xe0, 0xe0, 0xe0),
            gray: Color::Rgb(0x6b, 0x72, 0x80),
            background: Color::Rgb(0x0a, 0x0a, 0x1a),
        }
    }

    /// Parse hex color string to ratatui Color.
    pub fn parse_hex_color(hex: &str) -> Result<Color> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(anyhow::anyhow!("Invalid hex color: {}", hex));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .with_context(|| format!("Invalid red component in hex color: {}", hex))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .with_context(|| format!("Invalid green component in hex color: {}", hex))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .with_context(|| format!("Invalid blue component in hex color: {}", hex))?;

        Ok(Color::Rgb(r, g, b))
    }

    /// Applies configured overrides. Bad values are logged and skipped.
    pub fn with_overrides(mut self, colors: Option<&CustomColors>) -> Self {
        let Some(colors) = colors else {
            return self;
        };

        for (name, value) in colors.entries() {
            let color = match Self::parse_hex_color(value) {
                Ok(color) => color,
                Err(e) => {
                    warn!(color = name, error = %e, "ignoring invalid color override");
                    continue;
                }
            };
            match name {
                "red" => self.red = color,
                "green" => self.green = color,
                "yellow" => self.yellow = color,
                "blue" => self.blue = color,
                "magenta" => self.magenta = color,
                "cyan" => self.cyan = color,
                "white" => self.white = color,
                "gray" => self.gray = color,
                "background" => self.background = color,
                _ => {}
            }
        }
        self
    }

    pub fn color(&self, color: output::Color) -> Color {
        match color {
            output::Color::Red => self.red,
            output::Color::Green => self.green,
            output::Color::Yellow => self.yellow,
            output::Color::Blue => self.blue,
            output::Color::Magenta => self.magenta,
            output::Color::Cyan => self.cyan,
            output::Color::White => self.white,
            output::Color::Gray => self.gray,
        }
    }

    /// Default text style for the window body.
    pub fn base(&self) -> Style {
        Style::default().fg(self.white).bg(self.background)
    }

    pub fn style(&self, style: output::Style) -> Style {
        let mut out = Style::default();
        if let Some(color) = style.color {
            out = out.fg(self.color(color));
        }
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        if style.dim {
            out = out.add_modifier(Modifier::DIM);
        }
        out
    }

    /// Converts a shell line into a ratatui line.
    pub fn line(&self, line: &output::Line) -> Line<'static> {
        Line::from(
            line.spans
                .iter()
                .map(|span| Span::styled(span.text.clone(), self.style(span.style)))
                .collect::<Vec<_>>(),
        )
    }
}
