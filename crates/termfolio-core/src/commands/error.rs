//! Errors a command can end in. None of them end the session.

use thiserror::Error;

use crate::i18n;
use crate::locale::Locale;
use crate::output::{Color, Line, Span, Style};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First token matched no command.
    #[error("command not found: {name}")]
    NotFound { name: String, suggestion: Option<&'static str> },

    /// `cat` on a name outside the file table.
    #[error("{command}: {name}: no such file or directory")]
    NoSuchFile { command: &'static str, name: String },

    /// A sub-action or resource the command does not know.
    #[error("{command}: unknown argument \"{argument}\"")]
    UnknownArgument { command: &'static str, argument: String },

    /// A required argument was left out.
    #[error("usage: {usage}")]
    MissingArgument { usage: &'static str },
}

impl CommandError {
    /// Builds `NotFound`, attaching a typo hint when one is close enough.
    pub fn not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        let suggestion = super::CommandKind::closest(&name);
        Self::NotFound { name, suggestion }
    }

    pub fn no_such_file(command: &'static str, name: impl Into<String>) -> Self {
        Self::NoSuchFile { command, name: name.into() }
    }

    pub fn unknown_argument(command: &'static str, argument: impl Into<String>) -> Self {
        Self::UnknownArgument { command, argument: argument.into() }
    }

    /// Localized, styled lines for the sink.
    pub fn message_lines(&self, locale: Locale) -> Vec<Line> {
        let red = Style::fg(Color::Red);
        match self {
            Self::NotFound { name, suggestion } => {
                let mut lines = vec![Line::styled(
                    format!("{}: {}", i18n::CMD_NOT_FOUND.get(locale), name),
                    red,
                )];
                if let Some(candidate) = suggestion {
                    lines.push(Line::from_spans([
                        Span::colored(format!("{} ", i18n::DID_YOU_MEAN.get(locale)), Color::Yellow),
                        Span::colored(*candidate, Color::Green),
                        Span::colored("?", Color::Yellow),
                    ]));
                }
                lines.push(Line::from(Span::dim(i18n::FOR_HELP.get(locale))));
                lines
            }
            Self::NoSuchFile { command, name } => vec![Line::styled(
                format!("{}: {}: {}", command, name, i18n::NO_SUCH_FILE.get(locale)),
                red,
            )],
            Self::UnknownArgument { command, argument } => vec![Line::styled(
                format!("{}: {} \"{}\"", command, i18n::UNKNOWN_ARGUMENT.get(locale), argument),
                red,
            )],
            Self::MissingArgument { usage } => vec![Line::styled(
                format!("{}: {}", i18n::USAGE.get(locale), usage),
                Style::fg(Color::Yellow),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(err: &CommandError, locale: Locale) -> String {
        err.message_lines(locale).iter().map(Line::plain).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_not_found_with_hint() {
        let err = CommandError::not_found("hlep");
        let out = text(&err, Locale::En);
        assert!(out.contains("Command not found: hlep"));
        assert!(out.contains("Did you mean help?"));
        assert!(out.contains("Type help for available commands."));
    }

    #[test]
    fn test_not_found_without_hint_in_spanish() {
        let err = CommandError::not_found("sudo-make-me-a-sandwich");
        let out = text(&err, Locale::Es);
        assert!(out.contains("Comando no encontrado: sudo-make-me-a-sandwich"));
        assert!(!out.contains("Quisiste"));
    }

    #[test]
    fn test_no_such_file() {
        let err = CommandError::no_such_file("cat", "secrets.txt");
        assert_eq!(text(&err, Locale::En), "cat: secrets.txt: No such file or directory");
        assert_eq!(err.to_string(), "cat: secrets.txt: no such file or directory");
    }

    #[test]
    fn test_unknown_argument_names_it() {
        let err = CommandError::unknown_argument("kubectl", "bogus");
        assert!(text(&err, Locale::En).contains("\"bogus\""));
    }

    #[test]
    fn test_missing_argument() {
        let err = CommandError::MissingArgument { usage: "cat <file>" };
        assert_eq!(text(&err, Locale::Es), "Uso: cat <file>");
    }
}
