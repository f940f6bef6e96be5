//! Input handling module
//!
//! Maps raw key events to application actions per mode. Kept free of any
//! state mutation so the mapping is trivially testable.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level actions the user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleSelect,
    SetActive,
    OpenDialog,
    Save,
    ToggleHelp,
    CycleLeft,
    CycleRight,
    Insert(char),
    Backspace,
    Confirm,
    Cancel,
    None,
}

/// Map a key event to an action for the given mode.
pub fn map_key(mode: AppMode, key: KeyEvent) -> Action {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        AppMode::ObjectList => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Char(' ') => Action::ToggleSelect,
            KeyCode::Char('a') => Action::SetActive,
            KeyCode::Char('r') => Action::OpenDialog,
            KeyCode::Char('s') => Action::Save,
            KeyCode::Char('?') | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        },
        AppMode::RenameDialog => match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Up | KeyCode::BackTab => Action::MoveUp,
            KeyCode::Down | KeyCode::Tab => Action::MoveDown,
            KeyCode::Left => Action::CycleLeft,
            KeyCode::Right => Action::CycleRight,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Insert(c),
            _ => Action::None,
        },
    }
}
