//! Main application state and event loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tracing::{debug, info};

use termfolio_core::{IncidentState, Shell};

use crate::components::window_title;
use crate::config::TuiConfig;
use crate::keys::{Input, translate};
use crate::screen::{SCROLL_STEP, Screen};
use crate::theme::TermTheme;
use crate::views::render_window;

/// Delay between the `exit` farewell and closing the window.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(100);

/// Events raised by timers the app schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The resolved incident has been on screen long enough.
    IncidentAcknowledged,
    Quit,
}

/// One turn of the event loop.
enum Step {
    Terminal(Event),
    Tick,
    App(AppEvent),
    InputClosed,
}

/// Main application state.
pub struct App {
    pub shell: Shell,
    pub screen: Screen,
    pub theme: TermTheme,
    pub should_quit: bool,
    title: String,
    acknowledge_after: Duration,
    tick: Duration,
    acknowledgement_pending: bool,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Creates the app and writes the welcome banner.
    pub fn new(shell: Shell, config: &TuiConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut screen = Screen::new(config.ui.scrollback_lines);
        shell.banner(&mut screen);

        Self {
            shell,
            screen,
            theme: TermTheme::portfolio().with_overrides(config.ui.colors.as_ref()),
            should_quit: false,
            title: window_title(&config.shell.prompt_user, &config.shell.prompt_host),
            acknowledge_after: Duration::from_secs(config.incident.acknowledge_after_secs),
            tick: Duration::from_millis(config.ui.tick_millis),
            acknowledgement_pending: false,
            events_tx,
            events_rx,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn acknowledgement_pending(&self) -> bool {
        self.acknowledgement_pending
    }

    /// Applies one translated key press.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Key(key) => {
                self.shell.handle_key(key, &mut self.screen);
                self.after_key();
            }
            Input::Quit => {
                if self.shell.editor().buffer().is_empty() {
                    info!("quit requested");
                    self.should_quit = true;
                }
            }
            Input::ScrollUp => self.screen.scroll_up(SCROLL_STEP),
            Input::ScrollDown => self.screen.scroll_down(SCROLL_STEP),
        }
    }

    /// Applies an event from a scheduled timer.
    pub fn handle_event(&mut self, event: AppEvent) {
        debug!(?event, "app event");
        match event {
            AppEvent::IncidentAcknowledged => {
                self.acknowledgement_pending = false;
                self.shell.acknowledge_incident();
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }

    /// Waits for the next scheduled event.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Starts timers for effects the last key produced.
    fn after_key(&mut self) {
        if self.screen.take_navigation_request() {
            self.schedule(AppEvent::Quit, NAVIGATE_DELAY);
        }

        let state = self.shell.session().incidents().state();
        if state == IncidentState::Resolved && !self.acknowledgement_pending {
            self.acknowledgement_pending = true;
            self.schedule(AppEvent::IncidentAcknowledged, self.acknowledge_after);
        }
    }

    fn schedule(&self, event: AppEvent, delay: Duration) {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only goes away with the app.
            let _ = tx.send(event);
        });
    }

    /// Runs until quit, redrawing after every event and on each tick.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut reader = EventStream::new();
        let mut tick = tokio::time::interval(self.tick);

        while !self.should_quit {
            terminal.draw(|frame| {
                render_window(
                    frame,
                    &self.shell,
                    &self.screen,
                    &self.theme,
                    &self.title,
                    self.shell.session().now(),
                );
            })?;

            let step = tokio::select! {
                maybe = reader.next() => match maybe {
                    Some(Ok(event)) => Step::Terminal(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => Step::InputClosed,
                },
                _ = tick.tick() => Step::Tick,
                Some(event) = self.events_rx.recv() => Step::App(event),
            };

            match step {
                Step::Terminal(Event::Key(key)) => {
                    if let Some(input) = translate(key) {
                        self.handle_input(input);
                    }
                }
                Step::Terminal(_) | Step::Tick => {}
                Step::App(event) => self.handle_event(event),
                Step::InputClosed => self.should_quit = true,
            }
        }

        Ok(())
    }
}
