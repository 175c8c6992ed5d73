//! Floating alert panel shown while an incident is open or just resolved.

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use termfolio_core::{IncidentState, IncidentTracker, Locale, Localized, Severity, format_elapsed};

use crate::theme::TermTheme;

pub const ALERT_WIDTH: u16 = 46;
pub const ALERT_HEIGHT: u16 = 8;

const DETECTED: Localized = Localized::new("🚨 INCIDENT DETECTED", "🚨 INCIDENTE DETECTADO");
const INVESTIGATING: Localized = Localized::new("🔍 INVESTIGATING...", "🔍 INVESTIGANDO...");
const RESOLVED: Localized = Localized::new("✅ INCIDENT RESOLVED", "✅ INCIDENTE RESUELTO");
const TIME: Localized = Localized::new("Time", "Tiempo");
const TOTAL: Localized = Localized::new("Resolved", "Resueltos");
const HINT_ACTIVE: Localized =
    Localized::new("Run 'investigate' or 'resolve'", "Ejecuta 'investigate' o 'resolve'");
const HINT_INVESTIGATING: Localized = Localized::new("Run 'resolve'", "Ejecuta 'resolve'");

/// Panel title and border color for the state. `None` when nothing shows.
fn heading(state: IncidentState, theme: &TermTheme, locale: Locale) -> Option<(&'static str, Color)> {
    match state {
        IncidentState::Idle => None,
        IncidentState::Active => Some((DETECTED.get(locale), theme.red)),
        IncidentState::Investigating => Some((INVESTIGATING.get(locale), theme.yellow)),
        IncidentState::Resolved => Some((RESOLVED.get(locale), theme.green)),
    }
}

/// Body of the panel. Empty when no incident is tracked.
pub fn alert_lines(
    tracker: &IncidentTracker,
    now: DateTime<Utc>,
    theme: &TermTheme,
    locale: Locale,
) -> Vec<Line<'static>> {
    let Some(record) = tracker.current() else {
        return Vec::new();
    };

    let badge_color = match record.severity {
        Severity::Critical => theme.red,
        Severity::Warning => theme.yellow,
    };
    let elapsed = tracker.elapsed(now).map(format_elapsed).unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", record.severity.label()),
                Style::default().fg(theme.background).bg(badge_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(record.kind.as_str().to_string(), Style::default().fg(theme.gray)),
        ]),
        Line::from(Span::styled(record.message.clone(), Style::default().fg(theme.white))),
        Line::from(vec![
            Span::styled(format!("{}: ", TIME.get(locale)), Style::default().fg(theme.gray)),
            Span::styled(elapsed, Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("   {}: {}", TOTAL.get(locale), tracker.resolved_total()),
                Style::default().fg(theme.gray),
            ),
        ]),
    ];

    let hint = match tracker.state() {
        IncidentState::Active => Some(HINT_ACTIVE.get(locale)),
        IncidentState::Investigating => Some(HINT_INVESTIGATING.get(locale)),
        IncidentState::Idle | IncidentState::Resolved => None,
    };
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.gray).add_modifier(Modifier::DIM),
        )));
    }
    lines
}

/// Draws the panel in the top-right corner of `area`.
pub fn render_incident_alert(
    frame: &mut Frame,
    area: Rect,
    tracker: &IncidentTracker,
    now: DateTime<Utc>,
    theme: &TermTheme,
    locale: Locale,
) {
    let Some((title, border)) = heading(tracker.state(), theme, locale) else {
        return;
    };

    let width = ALERT_WIDTH.min(area.width);
    let height = ALERT_HEIGHT.min(area.height);
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(border).add_modifier(Modifier::BOLD)))
        .style(Style::default().bg(theme.background));

    let body = Paragraph::new(alert_lines(tracker, now, theme, locale))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, panel);
    frame.render_widget(body, panel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_idle_shows_nothing() {
        let tracker = IncidentTracker::new();
        let theme = TermTheme::portfolio();
        assert!(alert_lines(&tracker, Utc::now(), &theme, Locale::En).is_empty());
        assert!(heading(tracker.state(), &theme, Locale::En).is_none());
    }

    #[test]
    fn test_timer_runs_then_freezes() {
        let theme = TermTheme::portfolio();
        let start = Utc::now();
        let mut tracker = IncidentTracker::new();
        let mut rng = StdRng::seed_from_u64(1);
        let message = tracker.trigger(&mut rng, start).unwrap().message.clone();

        let lines = text(&alert_lines(&tracker, start + TimeDelta::seconds(75), &theme, Locale::En));
        assert_eq!(lines[1], message);
        assert!(lines[2].contains("Time: 01:15"));
        assert!(lines[2].contains("Resolved: 0"));
        assert!(lines[3].contains("investigate"));

        tracker.resolve(start + TimeDelta::seconds(90)).unwrap();
        let lines = text(&alert_lines(&tracker, start + TimeDelta::seconds(600), &theme, Locale::Es));
        assert!(lines[2].contains("Tiempo: 01:30"));
        assert!(lines[2].contains("Resueltos: 1"));
        assert_eq!(lines.len(), 3);
        assert_eq!(heading(tracker.state(), &theme, Locale::Es).unwrap().0, "✅ INCIDENTE RESUELTO");
    }
}
