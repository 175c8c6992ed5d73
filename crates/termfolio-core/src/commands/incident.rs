//! `incident`, `investigate`, `resolve`.

use super::dispatcher::Context;
use crate::i18n;
use crate::incident::{IncidentError, IncidentRecord, Severity, format_elapsed};
use crate::locale::Locale;
use crate::output::{Color, Line, Reply, Span, Style};

/// Rejected transitions are informational, not errors.
fn rejected(err: IncidentError, locale: Locale) -> Reply {
    let message = match err {
        IncidentError::AlreadyActive => i18n::INCIDENT_ALREADY_ACTIVE,
        IncidentError::AwaitingAcknowledgement => i18n::INCIDENT_AWAITING_ACK,
        IncidentError::NothingToInvestigate => i18n::NOTHING_TO_INVESTIGATE,
        IncidentError::NothingToResolve => i18n::NOTHING_TO_RESOLVE,
    };
    Reply::line(Line::styled(message.get(locale), Style::fg(Color::Yellow)))
}

fn alert_line(record: &IncidentRecord) -> Line {
    let color = match record.severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Line::from_spans([
        Span::raw("  "),
        Span::styled(format!("[{}]", record.severity.label()), Style::fg(color).bold()),
        Span::raw(format!(" {}", record.message)),
    ])
}

pub(super) fn incident(ctx: &mut Context<'_>) -> Reply {
    let locale = ctx.locale();
    match ctx.session.trigger_incident() {
        Ok(record) => Reply::new(vec![
            Line::styled(i18n::TRIGGERING_INCIDENT.get(locale), Style::fg(Color::Red).bold()),
            alert_line(record),
            Line::from(Span::dim(i18n::INCIDENT_NEXT_STEPS.get(locale))),
        ]),
        Err(err) => rejected(err, locale),
    }
}

pub(super) fn investigate(ctx: &mut Context<'_>) -> Reply {
    let locale = ctx.locale();
    match ctx.session.investigate_incident() {
        Ok(record) => Reply::new(vec![
            Line::styled(i18n::INVESTIGATING.get(locale), Style::fg(Color::Cyan)),
            alert_line(record),
            Line::from(Span::dim(i18n::ANALYZING.get(locale))),
        ]),
        Err(err) => rejected(err, locale),
    }
}

pub(super) fn resolve(ctx: &mut Context<'_>) -> Reply {
    let locale = ctx.locale();
    match ctx.session.resolve_incident() {
        Ok(resolution) => Reply::new(vec![
            Line::styled(
                format!(
                    "{} MTTR: {}",
                    i18n::INCIDENT_RESOLVED.get(locale),
                    format_elapsed(resolution.mttr)
                ),
                Style::fg(Color::Green),
            ),
            Line::from(Span::dim(format!(
                "{}: {}",
                i18n::TOTAL_RESOLVED.get(locale),
                resolution.total_resolved
            ))),
        ]),
        Err(err) => rejected(err, locale),
    }
}
