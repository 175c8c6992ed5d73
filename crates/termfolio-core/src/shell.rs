//! The interactive shell: editor, session and dispatcher wired together.

use std::sync::Arc;

use crate::commands::{CommandKind, Dispatcher, logo_lines};
use crate::config::ShellConfig;
use crate::editor::{Key, LineEditor};
use crate::i18n;
use crate::output::{Color, Line, Reply, Span, Style};
use crate::profile::ProfileData;
use crate::session::Session;
use crate::sink::Sink;

/// `<user>@<host>:~$ ` with the usual colors.
pub fn prompt_line(user: &str, host: &str) -> Line {
    Line::from_spans([
        Span::colored(format!("{}@{}", user, host), Color::Green),
        Span::raw(":"),
        Span::colored("~", Color::Cyan),
        Span::raw("$ "),
    ])
}

/// One terminal session over a profile.
#[derive(Debug)]
pub struct Shell {
    editor: LineEditor,
    session: Session,
    dispatcher: Dispatcher,
}

impl Shell {
    /// A shell on the system clock, in the configured language.
    pub fn new(data: Arc<ProfileData>, config: &ShellConfig) -> Self {
        Self::with_session(data, config, Session::new(config.resolved_locale()))
    }

    /// A shell over a prepared session (custom clock, seed or locale).
    pub fn with_session(data: Arc<ProfileData>, config: &ShellConfig, session: Session) -> Self {
        Self {
            editor: LineEditor::new(
                prompt_line(&config.prompt_user, &config.prompt_host),
                config.history_capacity,
            ),
            session,
            dispatcher: Dispatcher::new(data, config.prompt_user.clone()),
        }
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn data(&self) -> &ProfileData {
        self.dispatcher.data()
    }

    /// Welcome block followed by the first prompt.
    pub fn banner(&self, sink: &mut dyn Sink) {
        let locale = self.session.locale();
        let name = self.data().profile.first_name().to_string();

        let mut lines = vec![Line::blank()];
        lines.extend(logo_lines());
        lines.push(Line::blank());
        lines.push(Line::styled(
            format!("  {}", i18n::WELCOME.get(locale).replace("{name}", &name)),
            Style::fg(Color::White).bold(),
        ));
        lines.push(Line::blank());
        lines.push(Line::from(Span::dim(format!("  {}", i18n::HELP_TIP.get(locale)))));
        lines.push(Line::from(Span::dim(format!("  {}", i18n::TRY_NEOFETCH.get(locale)))));
        lines.push(Line::from_spans([
            Span::dim(format!("  {} ", i18n::CHANGE_LANGUAGE.get(locale))),
            Span::colored("lang es", Color::Green),
            Span::dim(" | "),
            Span::colored("lang en", Color::Green),
        ]));
        sink.write_lines(&lines);
        self.editor.show_prompt(sink);
    }

    /// Feeds one key event through the editor.
    pub fn handle_key(&mut self, key: Key, sink: &mut dyn Sink) {
        let Self { editor, session, dispatcher } = self;
        match key {
            Key::Char(ch) => editor.on_printable(ch, sink),
            Key::Backspace => editor.on_backspace(sink),
            Key::Enter => editor.on_enter(sink, |line| dispatcher.dispatch(line, session)),
            Key::Up => editor.on_history_up(sink),
            Key::Down => editor.on_history_down(sink),
            Key::Tab => editor.on_tab(&CommandKind::names(), sink),
            Key::Interrupt => editor.on_interrupt(sink),
            Key::ClearScreen => editor.on_clear_screen(sink),
        }
    }

    /// Types `text` character by character.
    pub fn type_text(&mut self, text: &str, sink: &mut dyn Sink) {
        for ch in text.chars() {
            self.handle_key(Key::Char(ch), sink);
        }
    }

    /// Runs one line outside the editor, leaving history untouched.
    pub fn execute(&mut self, line: &str) -> Reply {
        self.dispatcher.dispatch(line, &mut self.session)
    }

    /// Display-layer acknowledgement of a shown resolution.
    pub fn acknowledge_incident(&mut self) -> bool {
        self.session.acknowledge_incident()
    }
}
