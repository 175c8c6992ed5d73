//! Resolves a line to a command and runs it.

use std::sync::Arc;

use tracing::debug;

use super::error::CommandError;
use super::{Command, CommandKind, cluster, files, incident, info, system};
use crate::locale::Locale;
use crate::output::Reply;
use crate::profile::ProfileData;
use crate::session::Session;

/// What a handler gets to work with.
pub(super) struct Context<'a> {
    pub data: &'a ProfileData,
    /// User shown as file and image owner.
    pub owner: &'a str,
    pub session: &'a mut Session,
}

impl Context<'_> {
    pub fn locale(&self) -> Locale {
        self.session.locale()
    }
}

pub(super) type HandlerResult = Result<Reply, CommandError>;

/// Runs commands against read-only profile data and a mutable session.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    data: Arc<ProfileData>,
    owner: String,
}

impl Dispatcher {
    pub fn new(data: Arc<ProfileData>, owner: impl Into<String>) -> Self {
        Self { data, owner: owner.into() }
    }

    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    /// Runs one line. Always produces a reply; errors become messages.
    pub fn dispatch(&self, line: &str, session: &mut Session) -> Reply {
        let Some(command) = Command::parse(line) else {
            return Reply::empty();
        };
        debug!(command = %command.name, args = command.args.len(), "dispatching");

        let result = match command.kind() {
            Some(kind) => self.run(kind, &command.args, session),
            None => Err(CommandError::not_found(&command.name)),
        };

        result.unwrap_or_else(|err| {
            debug!(error = %err, "command rejected");
            Reply::new(err.message_lines(session.locale()))
        })
    }

    fn run(&self, kind: CommandKind, args: &[String], session: &mut Session) -> HandlerResult {
        let mut ctx = Context { data: self.data.as_ref(), owner: &self.owner, session };
        match kind {
            CommandKind::Help => Ok(info::help(&ctx)),
            CommandKind::Whoami => Ok(info::whoami(&ctx)),
            CommandKind::Neofetch => Ok(info::neofetch(&ctx)),
            CommandKind::Contact => Ok(info::contact(&ctx)),
            CommandKind::Skills => Ok(info::skills(&ctx)),
            CommandKind::Projects => Ok(info::projects(&ctx)),
            CommandKind::Certs => Ok(info::certs(&ctx)),
            CommandKind::Ls => Ok(files::ls(&ctx)),
            CommandKind::Cat => files::cat(&ctx, args),
            CommandKind::Kubectl => cluster::kubectl(&ctx, args),
            CommandKind::Docker => cluster::docker(&ctx, args),
            CommandKind::Incident => Ok(incident::incident(&mut ctx)),
            CommandKind::Investigate => Ok(incident::investigate(&mut ctx)),
            CommandKind::Resolve => Ok(incident::resolve(&mut ctx)),
            CommandKind::Lang => Ok(system::lang(&mut ctx, args)),
            CommandKind::Clear => Ok(Reply::clear_screen()),
            CommandKind::Matrix => Ok(system::matrix(&ctx)),
            CommandKind::Exit => Ok(system::exit(&ctx)),
        }
    }
}
