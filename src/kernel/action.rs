use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::models::{NodeId, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    /// Finalize the pending text into a token.
    Commit,
    MoveLeft,
    MoveRight,
    Backspace,
    Delete,
    /// Pointer placement relative to a rendered token.
    PlaceCursor { node: NodeId, placement: Placement },
}

impl EditorAction {
    pub fn from_key(key: &KeyEvent, commit_on_space: bool) -> Option<Self> {
        if !key.is_press() {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }

        let action = match key.code {
            KeyCode::Enter => EditorAction::Commit,
            KeyCode::Char(' ') if commit_on_space => EditorAction::Commit,
            KeyCode::Char(ch) => EditorAction::InsertChar(ch),
            KeyCode::Left => EditorAction::MoveLeft,
            KeyCode::Right => EditorAction::MoveRight,
            KeyCode::Backspace => EditorAction::Backspace,
            KeyCode::Delete => EditorAction::Delete,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/action.rs"]
mod tests;
