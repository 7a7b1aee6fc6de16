use crossterm::event::KeyEvent;

use super::keymap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Save,
    /// Enter: activates the focused button, otherwise saves.
    Submit,
    /// The close affordance; always goes through the exit prompt.
    Quit,
    FocusStep(i32),
    ClearStatus,
    Edit(KeyEvent),
}

pub fn classify(key: &KeyEvent) -> KeyAction {
    keymap::classify_key(key).unwrap_or(KeyAction::Edit(*key))
}
