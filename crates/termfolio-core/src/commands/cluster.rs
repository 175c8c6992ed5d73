//! `kubectl` and `docker`, dressed over the experience list.

use super::dispatcher::{Context, HandlerResult};
use super::error::CommandError;
use super::render::{pad, table_header};
use super::{CommandKind, info};
use crate::i18n;
use crate::output::{Color, Line, Reply, Span, Style};
use crate::profile::{ExperienceEntry, ExperienceStatus, career_days};

const DESCRIBE_USAGE: &str = "kubectl describe pod [name]";

fn status_style(status: ExperienceStatus) -> Style {
    match status {
        ExperienceStatus::Active => Style::fg(Color::Green),
        ExperienceStatus::Stable => Style::fg(Color::Cyan),
        ExperienceStatus::Legacy => Style::plain().dim(),
    }
}

pub(super) fn kubectl(ctx: &Context<'_>, args: &[String]) -> HandlerResult {
    let lowered: Vec<String> = args.iter().map(|arg| arg.to_lowercase()).collect();
    let action = lowered.first().map(String::as_str);
    let resource = lowered.get(1).map(String::as_str);

    match action {
        None => Ok(Reply::new(vec![
            Line::styled(
                format!("{}: {}", i18n::USAGE.get(ctx.locale()), CommandKind::Kubectl.usage()),
                Style::fg(Color::Yellow),
            ),
            Line::from(Span::dim("Resources: pods, ns, svc")),
        ])),
        Some("get") => match resource {
            None | Some("pods" | "pod" | "po" | "experience") => Ok(pods(ctx)),
            Some("ns" | "namespace" | "namespaces") => Ok(namespaces(ctx)),
            Some("svc" | "service" | "services") => Ok(services()),
            Some(_) => Err(CommandError::unknown_argument(
                CommandKind::Kubectl.name(),
                args[1].as_str(),
            )),
        },
        Some("describe") => match resource {
            None => Err(CommandError::MissingArgument { usage: DESCRIBE_USAGE }),
            Some("pod" | "pods" | "po") => match args.get(2) {
                None => Ok(info::skills(ctx)),
                Some(name) => ctx
                    .data
                    .experience_by_pod(name)
                    .map(|entry| describe(ctx, entry))
                    .ok_or_else(|| {
                        CommandError::unknown_argument(CommandKind::Kubectl.name(), name.as_str())
                    }),
            },
            Some(_) => Err(CommandError::unknown_argument(
                CommandKind::Kubectl.name(),
                args[1].as_str(),
            )),
        },
        Some(_) => Err(CommandError::unknown_argument(CommandKind::Kubectl.name(), args[0].as_str())),
    }
}

/// The experience list as a pod table.
pub(super) fn pods(ctx: &Context<'_>) -> Reply {
    let mut lines = vec![
        Line::blank(),
        table_header(&[("NAME", 26), ("NAMESPACE", 16), ("STATUS", 12), ("AGE", 0)]),
    ];
    for entry in &ctx.data.experience {
        lines.push(Line::from_spans([
            Span::raw(format!("{}{}", pad(&entry.pod_name(), 26), pad(&entry.namespace, 16))),
            Span::styled(pad(entry.status.as_str(), 12), status_style(entry.status)),
            Span::raw(entry.started()),
        ]));
    }
    Reply::new(lines)
}

fn namespaces(ctx: &Context<'_>) -> Reply {
    let mut lines = vec![Line::blank(), table_header(&[("NAME", 18), ("STATUS", 0)])];
    let mut seen: Vec<&str> = Vec::new();
    for entry in &ctx.data.experience {
        if seen.contains(&entry.namespace.as_str()) {
            continue;
        }
        seen.push(&entry.namespace);
        let (style, phase) = match entry.status {
            ExperienceStatus::Legacy => (Style::plain().dim(), "Terminated"),
            ExperienceStatus::Active | ExperienceStatus::Stable => (Style::fg(Color::Cyan), "Active"),
        };
        lines.push(Line::from_spans([
            Span::styled(pad(&entry.namespace, 18), style),
            Span::raw(phase),
        ]));
    }
    Reply::new(lines)
}

fn services() -> Reply {
    Reply::new(vec![
        Line::blank(),
        table_header(&[("NAME", 19), ("TYPE", 15), ("CLUSTER-IP", 0)]),
        Line::raw(format!("{}{}10.0.0.42", pad("observability", 19), pad("ClusterIP", 15))),
        Line::raw(format!("{}{}10.0.0.100", pad("monitoring", 19), pad("LoadBalancer", 15))),
    ])
}

fn describe(ctx: &Context<'_>, entry: &ExperienceEntry) -> Reply {
    let locale = ctx.locale();
    let field = |label: &str, value: Span| {
        Line::from_spans([Span::colored(pad(&format!("{}:", label), 14), Color::Yellow), value])
    };

    let mut lines = vec![
        Line::blank(),
        field("Name", Span::styled(entry.pod_name(), Style::fg(Color::Cyan).bold())),
        field(i18n::NAMESPACE.get(locale), Span::raw(entry.namespace.clone())),
        field("Status", Span::styled(entry.status.as_str(), status_style(entry.status))),
    ];
    if !entry.version.is_empty() {
        lines.push(field("Image", Span::raw(format!("{}:{}", entry.pod_name(), entry.version))));
    }
    if !entry.role.is_empty() {
        lines.push(field(i18n::ROLE.get(locale), Span::raw(entry.role.clone())));
    }
    lines.push(field(i18n::COMPANY.get(locale), Span::raw(entry.company.clone())));
    lines.push(field(i18n::PERIOD.get(locale), Span::raw(entry.period.clone())));
    let description = entry.description.get(locale);
    if !description.is_empty() {
        lines.push(field(i18n::DESCRIPTION.get(locale), Span::raw(description)));
    }
    if !entry.tags.is_empty() {
        lines.push(field(i18n::TAGS.get(locale), Span::dim(entry.tags.join(", "))));
    }
    lines.push(Line::blank());
    Reply::new(lines)
}

fn uptime(years: i64) -> String {
    match years {
        1 => "Up 1 year".to_string(),
        n => format!("Up {} years", n),
    }
}

pub(super) fn docker(ctx: &Context<'_>, args: &[String]) -> HandlerResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("ps") => {
            let years = (career_days(ctx.data.profile.career_start, ctx.session.now()) / 365).max(1);
            let image = format!("{}/portfolio:latest", ctx.owner);
            let row = |id: &str, image: &str, status: String| {
                Line::from_spans([
                    Span::dim(pad(id, 15)),
                    Span::raw(pad(image, 30)),
                    Span::colored(status, Color::Green),
                ])
            };
            Ok(Reply::new(vec![
                Line::blank(),
                table_header(&[("CONTAINER ID", 15), ("IMAGE", 30), ("STATUS", 0)]),
                row("a7f3x2b1c", image.as_str(), uptime(years)),
                row("k8s-monitor", "grafana/grafana:10.0", uptime(1)),
            ]))
        }
        Some("images") => {
            let row = |repo: &str, tag: &str, size: &str| {
                Line::raw(format!("{}{}{}", pad(repo, 24), pad(tag, 11), size))
            };
            Ok(Reply::new(vec![
                Line::blank(),
                table_header(&[("REPOSITORY", 24), ("TAG", 11), ("SIZE", 0)]),
                row("datadog/agent", "latest", "850MB"),
                row("grafana/grafana", "10.0", "320MB"),
                row("prom/prometheus", "v2.47", "200MB"),
            ]))
        }
        Some(_) => Err(CommandError::unknown_argument(CommandKind::Docker.name(), args[0].as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_wording() {
        assert_eq!(uptime(1), "Up 1 year");
        assert_eq!(uptime(3), "Up 3 years");
    }
}
