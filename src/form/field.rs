use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FieldDefinition;

/// Single-line text input bound to one column.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub definition: FieldDefinition,
    buffer: String,
}

impl FieldState {
    pub fn new(definition: FieldDefinition) -> Self {
        Self {
            definition,
            buffer: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true when the key changed the buffer.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if !is_text_input(key.modifiers) {
                    return false;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Delete => {
                let changed = !self.buffer.is_empty();
                self.buffer.clear();
                changed
            }
            _ => false,
        }
    }

    /// Pasted text lands on a single line.
    pub fn paste(&mut self, text: &str) -> bool {
        let before = self.buffer.len();
        self.buffer
            .extend(text.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
        self.buffer.len() != before
    }
}

/// AltGr arrives as Ctrl+Alt on Windows; only a lone Ctrl or Alt is a chord.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
    modifiers.contains(chord) || !modifiers.intersects(chord)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldState {
        FieldState::new(FieldDefinition {
            index: 0,
            label: "Name".into(),
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace_edit_buffer() {
        let mut field = field();
        assert!(field.handle_key(&key(KeyCode::Char('A'))));
        assert!(field.handle_key(&key(KeyCode::Char('n'))));
        assert!(field.handle_key(&key(KeyCode::Char('x'))));
        assert!(field.handle_key(&key(KeyCode::Backspace)));
        assert!(field.handle_key(&key(KeyCode::Char('n'))));
        assert_eq!(field.value(), "Ann");
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut field = field();
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(&chord));
        assert!(field.is_empty());
    }

    #[test]
    fn alt_chords_are_not_text() {
        let mut field = field();
        let chord = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT);
        assert!(!field.handle_key(&chord));
        assert!(field.is_empty());
    }

    #[test]
    fn altgr_characters_are_typed() {
        let mut field = field();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert!(field.handle_key(&KeyEvent::new(KeyCode::Char('@'), altgr)));
        let euro = KeyEvent::new(KeyCode::Char('€'), altgr | KeyModifiers::SHIFT);
        assert!(field.handle_key(&euro));
        assert_eq!(field.value(), "@€");
    }

    #[test]
    fn backspace_on_empty_reports_no_change() {
        let mut field = field();
        assert!(!field.handle_key(&key(KeyCode::Backspace)));
    }

    #[test]
    fn delete_clears_whole_value() {
        let mut field = field();
        field.set_value("Ann");
        assert!(field.handle_key(&key(KeyCode::Delete)));
        assert!(field.is_empty());
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut field = field();
        assert!(field.paste("Ann\r\nLee"));
        assert_eq!(field.value(), "AnnLee");
    }
}
