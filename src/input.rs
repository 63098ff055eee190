//! Maps terminal events onto game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// What a terminal event means to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Flap / start / restart.
    Tap,
    Quit,
    /// Anything else; ignored.
    None,
}

pub fn map_event(event: &Event) -> AppAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppAction::Tap,
            _ => AppAction::None,
        },
        _ => AppAction::None,
    }
}

pub fn map_key(key: &KeyEvent) -> AppAction {
    // Windows reports releases too; only presses flap
    if key.kind == KeyEventKind::Release {
        return AppAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') => AppAction::Tap,
        KeyCode::Esc | KeyCode::Char('q') => AppAction::Quit,
        _ => AppAction::None,
    }
}
