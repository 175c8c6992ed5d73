//! The pseudo filesystem: `ls` and `cat`.

use super::dispatcher::{Context, HandlerResult};
use super::error::CommandError;
use super::{CommandKind, cluster, info};
use crate::output::{Color, Line, Reply, Span, Style};

/// What a `cat` argument can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CatTarget {
    Readme,
    Contact,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl CatTarget {
    /// Normalizes `name` and looks it up in the alias table.
    ///
    /// Lower-cases, drops trailing `/`, drops one `.md` or `.txt`
    /// extension, then requires an exact alias.
    pub(super) fn resolve(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        let stem = lowered.trim_end_matches('/');
        let stem = stem.strip_suffix(".md").or_else(|| stem.strip_suffix(".txt")).unwrap_or(stem);
        match stem {
            "readme" => Some(Self::Readme),
            "contact" => Some(Self::Contact),
            "experience" => Some(Self::Experience),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "certifications" | "certs" => Some(Self::Certifications),
            _ => None,
        }
    }
}

const ENTRIES: [(&str, &str, bool); 6] = [
    ("drwxr-xr-x", "experience/", true),
    ("drwxr-xr-x", "projects/", true),
    ("drwxr-xr-x", "skills/", true),
    ("drwxr-xr-x", "certifications/", true),
    ("-rw-r--r--", "README.md", false),
    ("-rw-r--r--", "contact.txt", false),
];

pub(super) fn ls(ctx: &Context<'_>) -> Reply {
    let mut lines = vec![Line::blank()];
    for (mode, name, is_dir) in ENTRIES {
        lines.push(Line::from_spans([
            Span::colored(mode, Color::Cyan),
            Span::raw(format!("  {}  ", ctx.owner)),
            Span::colored(name, if is_dir { Color::Green } else { Color::White }),
        ]));
    }
    lines.push(Line::blank());
    Reply::new(lines)
}

pub(super) fn cat(ctx: &Context<'_>, args: &[String]) -> HandlerResult {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument { usage: CommandKind::Cat.usage() })?;
    let target = CatTarget::resolve(name)
        .ok_or_else(|| CommandError::no_such_file(CommandKind::Cat.name(), name.as_str()))?;

    Ok(match target {
        CatTarget::Readme => {
            let profile = &ctx.data.profile;
            Reply::new(vec![
                Line::blank(),
                Line::styled(format!("# {}", profile.name), Style::fg(Color::Cyan)),
                Line::blank(),
                Line::raw(profile.bio.get(ctx.locale())),
                Line::blank(),
            ])
        }
        CatTarget::Contact => info::contact(ctx),
        CatTarget::Experience => cluster::pods(ctx),
        CatTarget::Skills => info::skills(ctx),
        CatTarget::Projects => info::projects(ctx),
        CatTarget::Certifications => info::certs(ctx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(CatTarget::resolve("README.md"), Some(CatTarget::Readme));
        assert_eq!(CatTarget::resolve("readme"), Some(CatTarget::Readme));
        assert_eq!(CatTarget::resolve("contact.txt"), Some(CatTarget::Contact));
        assert_eq!(CatTarget::resolve("experience/"), Some(CatTarget::Experience));
        assert_eq!(CatTarget::resolve("experience.md"), Some(CatTarget::Experience));
        assert_eq!(CatTarget::resolve("Skills"), Some(CatTarget::Skills));
        assert_eq!(CatTarget::resolve("certs"), Some(CatTarget::Certifications));
        assert_eq!(CatTarget::resolve("certifications/"), Some(CatTarget::Certifications));
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(CatTarget::resolve("my-experience-notes"), None);
        assert_eq!(CatTarget::resolve("skills.md.md"), None);
        assert_eq!(CatTarget::resolve("secrets.txt"), None);
        assert_eq!(CatTarget::resolve(""), None);
    }
}
