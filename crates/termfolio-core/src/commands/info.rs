//! Profile views: help, whoami, neofetch, contact, skills, projects, certs.

use super::CommandKind;
use super::dispatcher::Context;
use super::render::{pad, section, skill_bar};
use crate::i18n;
use crate::output::{Color, Line, Reply, Span, Style};
use crate::profile::career_days;

const HELP_LABEL_WIDTH: usize = 14;
const NEOFETCH_LABEL_WIDTH: usize = 15;
const SKILL_NAME_WIDTH: usize = 14;

/// Bar colors, cycled per skill group.
const GROUP_COLORS: [Color; 3] = [Color::Green, Color::Cyan, Color::Magenta];

const LOGO: [&str; 7] = [
    "",
    "███████╗██████╗ ███████╗",
    "██╔════╝██╔══██╗██╔════╝",
    "███████╗██████╔╝█████╗  ",
    "╚════██║██╔══██╗██╔══╝  ",
    "███████║██║  ██║███████╗",
    "╚══════╝╚═╝  ╚═╝╚══════╝",
];
const LOGO_WIDTH: usize = 26;

/// The logo block, also printed by the welcome banner.
pub fn logo_lines() -> Vec<Line> {
    LOGO.iter().skip(1).map(|row| Line::styled(format!("  {}", row), Style::fg(Color::Cyan))).collect()
}

pub(super) fn help(ctx: &Context<'_>) -> Reply {
    let locale = ctx.locale();
    let mut lines = vec![
        Line::blank(),
        Line::styled(i18n::AVAILABLE_COMMANDS.get(locale), Style::fg(Color::Cyan).bold()),
        Line::blank(),
    ];
    for kind in CommandKind::ALL {
        lines.push(Line::from_spans([
            Span::raw("  "),
            Span::colored(pad(kind.help_label(), HELP_LABEL_WIDTH), Color::Green),
            Span::raw(" "),
            Span::dim(kind.description().get(locale)),
        ]));
    }
    lines.push(Line::blank());
    lines.push(Line::from(Span::dim(i18n::KEYS_TIP.get(locale))));
    Reply::new(lines)
}

pub(super) fn whoami(ctx: &Context<'_>) -> Reply {
    let profile = &ctx.data.profile;
    Reply::new(vec![
        Line::blank(),
        Line::styled(profile.name.clone(), Style::fg(Color::Cyan).bold()),
        Line::from_spans([
            Span::colored(profile.role.clone(), Color::White),
            Span::raw(" @ "),
            Span::colored(profile.company.clone(), Color::Green),
        ]),
        Line::from(Span::dim(format!("📍 {}", profile.location))),
        Line::blank(),
        Line::raw(profile.bio.get(ctx.locale())),
        Line::blank(),
    ])
}

fn labelled(label: &str, value: impl Into<String>) -> Vec<Span> {
    vec![
        Span::colored(pad(&format!("{}:", label), NEOFETCH_LABEL_WIDTH), Color::Yellow),
        Span::raw(value),
    ]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(super) fn neofetch(ctx: &Context<'_>) -> Reply {
    let locale = ctx.locale();
    let profile = &ctx.data.profile;
    let days = career_days(profile.career_start, ctx.session.now());

    let mut info: Vec<Vec<Span>> = vec![
        vec![Span::styled(profile.name.clone(), Style::fg(Color::Cyan).bold())],
        vec![Span::dim("─".repeat(30))],
        labelled(i18n::ROLE.get(locale), profile.role.clone()),
        labelled(i18n::COMPANY.get(locale), profile.company.clone()),
        labelled(i18n::LOCATION.get(locale), profile.location.clone()),
        labelled(i18n::UPTIME.get(locale), format!("{} {}", days, i18n::DAYS.get(locale))),
        labelled("SLO", "99.99%"),
        Vec::new(),
    ];
    for group in &ctx.data.skills {
        let names: Vec<&str> = group.skills.iter().take(4).map(|skill| skill.name.as_str()).collect();
        info.push(labelled(&capitalize(&group.key), names.join(", ")));
    }
    info.push(Vec::new());
    info.push(vec![Span::dim("─".repeat(30))]);
    let mut swatches = Vec::new();
    for color in [Color::Red, Color::Yellow, Color::Green, Color::Cyan, Color::Magenta, Color::White] {
        if !swatches.is_empty() {
            swatches.push(Span::raw(" "));
        }
        swatches.push(Span::colored("●", color));
    }
    info.push(swatches);

    let rows = LOGO.len().max(info.len());
    let mut info = info.into_iter();
    let lines = (0..rows)
        .map(|row| {
            let logo = LOGO.get(row).copied().unwrap_or_default();
            let mut spans = vec![
                Span::colored(pad(&format!("  {}", logo), LOGO_WIDTH), Color::Cyan),
                Span::raw("  "),
            ];
            spans.extend(info.next().unwrap_or_default());
            Line::from_spans(spans)
        })
        .collect();
    Reply::new(lines)
}

pub(super) fn contact(ctx: &Context<'_>) -> Reply {
    let profile = &ctx.data.profile;
    let mut lines = section(i18n::CONTACT_INFO.get(ctx.locale()), 40);
    for (icon, label, value) in [
        ("📧", "Email:", &profile.email),
        ("💼", "LinkedIn:", &profile.linkedin),
        ("🐙", "GitHub:", &profile.github),
    ] {
        lines.push(Line::from_spans([
            Span::raw("  "),
            Span::colored(icon, Color::Green),
            Span::raw(format!(" {}{}", pad(label, 10), value)),
        ]));
    }
    lines.push(Line::blank());
    Reply::new(lines)
}

pub(super) fn skills(ctx: &Context<'_>) -> Reply {
    let locale = ctx.locale();
    let mut lines = section(i18n::TECHNICAL_SKILLS.get(locale), 50);
    for (index, group) in ctx.data.skills.iter().enumerate() {
        if index > 0 {
            lines.push(Line::blank());
        }
        let color = GROUP_COLORS[index % GROUP_COLORS.len()];
        lines.push(Line::styled(format!("{}:", group.title.get(locale)), Style::fg(Color::Yellow)));
        for skill in &group.skills {
            lines.push(Line::from_spans([
                Span::raw(format!("  {} ", pad(&skill.name, SKILL_NAME_WIDTH))),
                Span::colored(skill_bar(skill.level), color),
                Span::raw(format!(" {}%", skill.level)),
            ]));
        }
    }
    Reply::new(lines)
}

pub(super) fn projects(ctx: &Context<'_>) -> Reply {
    let mut lines = section(i18n::PERSONAL_PROJECTS.get(ctx.locale()), 50);
    for project in &ctx.data.projects {
        lines.push(Line::from_spans([
            Span::colored("▸", Color::Green),
            Span::raw(" "),
            Span::bold(project.name.clone()),
            Span::raw(" "),
            Span::dim(format!("({})", project.tech)),
        ]));
        lines.push(Line::raw(format!("  {}", project.description)));
        lines.push(Line::from(Span::dim(format!("  {}", project.url))));
        lines.push(Line::blank());
    }
    Reply::new(lines)
}

pub(super) fn certs(ctx: &Context<'_>) -> Reply {
    let mut lines = section(i18n::CERTIFICATIONS.get(ctx.locale()), 50);
    for cert in &ctx.data.certifications {
        lines.push(Line::from_spans([
            Span::raw("  "),
            Span::colored("✓", Color::Green),
            Span::raw(format!(" {}", cert)),
        ]));
    }
    lines.push(Line::blank());
    Reply::new(lines)
}
