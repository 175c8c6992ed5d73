//! Command table, parsing and dispatch.

mod cluster;
mod dispatcher;
mod error;
mod files;
mod incident;
mod info;
mod render;
mod system;

pub use dispatcher::Dispatcher;
pub use error::CommandError;
pub use info::logo_lines;

use crate::locale::Localized;

/// Every command the shell knows, in `help` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Whoami,
    Neofetch,
    Contact,
    Ls,
    Cat,
    Skills,
    Projects,
    Certs,
    Kubectl,
    Docker,
    Incident,
    Investigate,
    Resolve,
    Lang,
    Clear,
    Matrix,
    Exit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 18] = [
        Self::Help,
        Self::Whoami,
        Self::Neofetch,
        Self::Contact,
        Self::Ls,
        Self::Cat,
        Self::Skills,
        Self::Projects,
        Self::Certs,
        Self::Kubectl,
        Self::Docker,
        Self::Incident,
        Self::Investigate,
        Self::Resolve,
        Self::Lang,
        Self::Clear,
        Self::Matrix,
        Self::Exit,
    ];

    /// The name typed to run the command.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Whoami => "whoami",
            Self::Neofetch => "neofetch",
            Self::Contact => "contact",
            Self::Ls => "ls",
            Self::Cat => "cat",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certs => "certs",
            Self::Kubectl => "kubectl",
            Self::Docker => "docker",
            Self::Incident => "incident",
            Self::Investigate => "investigate",
            Self::Resolve => "resolve",
            Self::Lang => "lang",
            Self::Clear => "clear",
            Self::Matrix => "matrix",
            Self::Exit => "exit",
        }
    }

    /// Name plus argument synopsis, as shown by `help`.
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Cat => "cat <file>",
            Self::Kubectl => "kubectl <get|describe> [resource]",
            Self::Docker => "docker [ps|images]",
            Self::Lang => "lang es|en",
            other => other.name(),
        }
    }

    /// The synopsis shown in the `help` table, which keeps it short.
    pub const fn help_label(self) -> &'static str {
        match self {
            Self::Cat => "cat <file>",
            Self::Lang => "lang es|en",
            other => other.name(),
        }
    }

    pub const fn description(self) -> Localized {
        match self {
            Self::Help => Localized::new("List available commands", "Listar comandos disponibles"),
            Self::Whoami => Localized::new("Show my profile", "Mostrar mi perfil"),
            Self::Neofetch => Localized::new("System info SRE style", "Info del sistema estilo SRE"),
            Self::Contact => Localized::new("Contact details", "Datos de contacto"),
            Self::Ls => Localized::new("List sections", "Listar secciones"),
            Self::Cat => Localized::new("View a section", "Ver una sección"),
            Self::Skills => Localized::new("Technical skills", "Habilidades técnicas"),
            Self::Projects => Localized::new("Personal projects", "Proyectos personales"),
            Self::Certs => Localized::new("Certifications", "Certificaciones"),
            Self::Kubectl => Localized::new("Kubernetes commands", "Comandos Kubernetes"),
            Self::Docker => Localized::new("Docker commands", "Comandos Docker"),
            Self::Incident => Localized::new("Trigger incident sim", "Simular incidente"),
            Self::Investigate => Localized::new("Investigate incident", "Investigar incidente"),
            Self::Resolve => Localized::new("Resolve incident", "Resolver incidente"),
            Self::Lang => Localized::new("Change language", "Cambiar idioma"),
            Self::Clear => Localized::new("Clear terminal", "Limpiar terminal"),
            Self::Matrix => Localized::new("Easter egg", "Easter egg"),
            Self::Exit => Localized::new("Back to portfolio", "Volver al portfolio"),
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// All command names, in table order.
    pub fn names() -> [&'static str; 18] {
        Self::ALL.map(Self::name)
    }

    /// Closest command name within edit distance 2, for typo hints.
    pub fn closest(name: &str) -> Option<&'static str> {
        let name = name.to_lowercase();
        Self::ALL
            .into_iter()
            .map(|kind| (kind.name(), strsim::levenshtein(kind.name(), &name)))
            .filter(|(_, distance)| *distance <= 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(candidate, _)| candidate)
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lower-cased first token.
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Splits on runs of whitespace. `None` for a blank line.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let name = parts.next()?.to_lowercase();
        Some(Self { name, args: parts.map(str::to_string).collect() })
    }

    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_command() {
        let cmd = Command::parse("  KUBECTL   get\tpods ").unwrap();
        assert_eq!(cmd.name, "kubectl");
        assert_eq!(cmd.args, vec!["get", "pods"]);
        assert_eq!(cmd.kind(), Some(CommandKind::Kubectl));
    }

    #[test]
    fn test_parse_blank() {
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   \t").is_none());
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        let cmd = Command::parse("cat README.md").unwrap();
        assert_eq!(cmd.args, vec!["README.md"]);
    }

    #[test]
    fn test_names_unique_and_lowercase() {
        let names = CommandKind::names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.iter().all(|name| *name == name.to_lowercase()));
    }

    #[test]
    fn test_from_name_roundtrip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
            assert_eq!(CommandKind::from_name(&kind.name().to_uppercase()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("sudo"), None);
    }

    #[test]
    fn test_closest() {
        assert_eq!(CommandKind::closest("hlep"), Some("help"));
        assert_eq!(CommandKind::closest("skils"), Some("skills"));
        assert_eq!(CommandKind::closest("KUBECTL"), Some("kubectl"));
        assert_eq!(CommandKind::closest("xyzzy"), None);
    }
}
