//! Termfolio core: a terminal-style portfolio shell.
//!
//! Key events go into a [`LineEditor`]; submitted lines go to the
//! [`Dispatcher`], which renders the read-only [`ProfileData`] and drives the
//! incident simulation held in the [`Session`]. Output is styled
//! [`Line`]s written to a [`Sink`]. Nothing here does terminal I/O.

pub mod clock;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod i18n;
pub mod incident;
pub mod locale;
pub mod output;
pub mod profile;
pub mod session;
pub mod shell;
pub mod sink;

pub use clock::{Clock, ManualClock, SystemClock};
pub use commands::{Command, CommandError, CommandKind, Dispatcher};
pub use config::{LocaleSetting, ShellConfig};
pub use editor::{Key, LineEditor};
pub use error::{CoreError, Result};
pub use history::History;
pub use incident::{
    IncidentError, IncidentKind, IncidentRecord, IncidentState, IncidentTracker, Resolution,
    Severity, format_elapsed,
};
pub use locale::{Locale, Localized};
pub use output::{Color, Effect, Line, Reply, Span, Style};
pub use profile::ProfileData;
pub use session::Session;
pub use shell::{Shell, prompt_line};
pub use sink::{Sink, Transcript, present};
