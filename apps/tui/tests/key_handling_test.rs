//! Crossterm key events through to the shell.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use termfolio_core::{Key, Locale, ProfileData, Session, Shell};
use termfolio_tui::app::App;
use termfolio_tui::config::TuiConfig;
use termfolio_tui::keys::{Input, translate};

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn app() -> App {
    let config = TuiConfig::default();
    let shell = Shell::with_session(
        Arc::new(ProfileData::builtin()),
        &config.shell,
        Session::new(Locale::En),
    );
    App::new(shell, &config)
}

fn type_keys(app: &mut App, events: impl IntoIterator<Item = KeyEvent>) {
    for event in events {
        if let Some(input) = translate(event) {
            app.handle_input(input);
        }
    }
}

fn chars(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| press(KeyCode::Char(c), KeyModifiers::NONE)).collect()
}

#[test]
fn test_plain_and_shifted_characters() {
    assert_eq!(
        translate(press(KeyCode::Char('a'), KeyModifiers::NONE)),
        Some(Input::Key(Key::Char('a')))
    );
    assert_eq!(
        translate(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Some(Input::Key(Key::Char('A')))
    );
}

#[test]
fn test_control_chords() {
    assert_eq!(
        translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Input::Key(Key::Interrupt))
    );
    assert_eq!(
        translate(press(KeyCode::Char('l'), KeyModifiers::CONTROL)),
        Some(Input::Key(Key::ClearScreen))
    );
    assert_eq!(translate(press(KeyCode::Char('d'), KeyModifiers::CONTROL)), Some(Input::Quit));
    assert_eq!(translate(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    assert_eq!(translate(press(KeyCode::Char('x'), KeyModifiers::ALT)), None);
}

#[test]
fn test_editing_keys() {
    let cases = [
        (KeyCode::Enter, Input::Key(Key::Enter)),
        (KeyCode::Backspace, Input::Key(Key::Backspace)),
        (KeyCode::Tab, Input::Key(Key::Tab)),
        (KeyCode::Up, Input::Key(Key::Up)),
        (KeyCode::Down, Input::Key(Key::Down)),
        (KeyCode::PageUp, Input::ScrollUp),
        (KeyCode::PageDown, Input::ScrollDown),
    ];
    for (code, expected) in cases {
        assert_eq!(translate(press(code, KeyModifiers::NONE)), Some(expected));
    }
    assert_eq!(translate(press(KeyCode::Left, KeyModifiers::NONE)), None);
    assert_eq!(translate(press(KeyCode::F(1), KeyModifiers::NONE)), None);
}

#[test]
fn test_release_events_ignored() {
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert_eq!(translate(release), None);
}

#[test]
fn test_typed_command_reaches_screen() {
    let mut app = app();
    let mut events = chars("whoamj");
    events.push(press(KeyCode::Backspace, KeyModifiers::NONE));
    events.extend(chars("i"));
    events.push(press(KeyCode::Enter, KeyModifiers::NONE));
    type_keys(&mut app, events);

    let text = app.screen.transcript().plain_text();
    assert!(text.contains("guest@sre:~$ whoami"));
    assert!(text.contains("Site Reliability Engineer @ Banco Falabella"));
    assert_eq!(app.shell.editor().history().last(), Some("whoami"));
}

#[test]
fn test_ctrl_c_then_history() {
    let mut app = app();
    let mut events = chars("skills");
    events.push(press(KeyCode::Enter, KeyModifiers::NONE));
    events.extend(chars("oops"));
    events.push(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
    events.push(press(KeyCode::Up, KeyModifiers::NONE));
    type_keys(&mut app, events);

    assert!(app.screen.transcript().plain_text().contains("guest@sre:~$ oops^C"));
    assert_eq!(app.shell.editor().buffer(), "skills");
}

#[test]
fn test_ctrl_l_clears_screen() {
    let mut app = app();
    let mut events = chars("ls");
    events.push(press(KeyCode::Enter, KeyModifiers::NONE));
    events.push(press(KeyCode::Char('l'), KeyModifiers::CONTROL));
    type_keys(&mut app, events);

    assert_eq!(app.screen.transcript().plain_lines(), vec!["guest@sre:~$ "]);
    assert!(!app.should_quit);
}
