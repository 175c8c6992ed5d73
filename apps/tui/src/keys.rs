//! Crossterm key events to shell keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_core::Key;

/// What a key press means to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Goes to the line editor.
    Key(Key),
    /// Ctrl+D. Ignored by the app while the line has text.
    Quit,
    ScrollUp,
    ScrollDown,
}

/// Maps a crossterm key event. Releases and unbound keys yield `None`.
pub fn translate(event: KeyEvent) -> Option<Input> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt_or_meta = event
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META);

    let input = match event.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => Input::Key(Key::Interrupt),
            'l' => Input::Key(Key::ClearScreen),
            'd' => Input::Quit,
            _ => return None,
        },
        KeyCode::Char(_) if alt_or_meta => return None,
        KeyCode::Char(c) => Input::Key(Key::Char(c)),
        KeyCode::Enter => Input::Key(Key::Enter),
        KeyCode::Backspace => Input::Key(Key::Backspace),
        KeyCode::Tab => Input::Key(Key::Tab),
        KeyCode::Up => Input::Key(Key::Up),
        KeyCode::Down => Input::Key(Key::Down),
        KeyCode::PageUp => Input::ScrollUp,
        KeyCode::PageDown => Input::ScrollDown,
        _ => return None,
    };
    Some(input)
}
