use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::Section;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    JumpToSection(Section),
    NextSection,
    PrevSection,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key closes the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Line scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,

        // Page scrolling
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,

        // Section navigation
        (KeyCode::Char(c @ '1'..='6'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            Action::JumpToSection(Section::ALL[index])
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevSection,

        // Help overlay
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::Help,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::Help,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}
