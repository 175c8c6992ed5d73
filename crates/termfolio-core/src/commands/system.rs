//! `lang`, `matrix`, `exit`.

use super::CommandKind;
use super::dispatcher::Context;
use crate::i18n;
use crate::locale::Locale;
use crate::output::{Color, Effect, Line, Reply, Span, Style};

const RAIN: [&str; 6] = [
    "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
    "  ░ 1 ｱ 0 ﾊ 1 1 ﾐ 0 ﾋ 1 ｰ 0 ｳ 1 ｼ ░",
    "  ░ ﾅ 0 ﾓ 1 ﾆ 0 ｻ 1 ﾜ 0 ﾂ 1 ｵ 0 ﾘ ░",
    "  ░ 0 ｱ 1 ﾎ 0 ﾃ 1 ﾏ 0 ｹ 1 ﾒ 0 ｴ 1 ░",
    "  ░ ｶ 1 ｷ 0 ﾑ 1 ﾕ 0 ﾗ 1 ｾ 0 ﾈ 1 ｽ ░",
    "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
];

pub(super) fn lang(ctx: &mut Context<'_>, args: &[String]) -> Reply {
    match args.first().and_then(|code| Locale::parse(code)) {
        Some(locale) => {
            ctx.session.set_locale(locale);
            Reply::line(Line::styled(i18n::LANGUAGE_CHANGED.get(locale), Style::fg(Color::Green)))
        }
        None => {
            let current = ctx.locale();
            Reply::new(vec![
                Line::styled(
                    format!("{}: {}", i18n::USAGE.get(current), CommandKind::Lang.usage()),
                    Style::fg(Color::Yellow),
                ),
                Line::from(Span::dim(format!("{}: {}", i18n::CURRENT.get(current), current))),
            ])
        }
    }
}

pub(super) fn matrix(ctx: &Context<'_>) -> Reply {
    let mut lines: Vec<Line> =
        RAIN.iter().map(|row| Line::styled(*row, Style::fg(Color::Green))).collect();
    lines.push(Line::blank());
    for text in [
        format!("Wake up, {}...", ctx.data.profile.first_name()),
        "The SRE has you...".to_string(),
        "Follow the white rabbit. 🐰".to_string(),
    ] {
        lines.push(Line::from(Span::dim(text)));
    }
    Reply::new(lines)
}

pub(super) fn exit(ctx: &Context<'_>) -> Reply {
    Reply::line(Line::styled(i18n::BACK_TO_PORTFOLIO.get(ctx.locale()), Style::fg(Color::Green)))
        .with_effect(Effect::NavigateAway)
}
