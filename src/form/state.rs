use crate::domain::FieldSet;

use super::field::FieldState;

/// Focusable element of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Save,
    Exit,
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: FieldSet,
    inputs: Vec<FieldState>,
    focus: Focus,
}

impl FormState {
    pub fn new(fields: FieldSet) -> Self {
        let inputs = fields.iter().cloned().map(FieldState::new).collect();
        Self {
            fields,
            inputs,
            focus: Focus::Field(0),
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn inputs(&self) -> &[FieldState] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn values(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|input| input.value().to_string())
            .collect()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.inputs.get(index).map(FieldState::value)
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.inputs.get_mut(index) {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn clear_values(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.inputs.iter().any(|input| !input.is_empty())
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = match focus {
            Focus::Field(index) if index >= self.inputs.len() => Focus::Save,
            other => other,
        };
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus_position() + 1) % self.focus_slots();
        self.focus = self.focus_at(next);
    }

    pub fn focus_prev(&mut self) {
        let slots = self.focus_slots();
        let prev = (self.focus_position() + slots - 1) % slots;
        self.focus = self.focus_at(prev);
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        match self.focus {
            Focus::Field(index) => self.inputs.get_mut(index),
            _ => None,
        }
    }

    fn focus_slots(&self) -> usize {
        self.inputs.len() + 2
    }

    fn focus_position(&self) -> usize {
        match self.focus {
            Focus::Field(index) => index,
            Focus::Save => self.inputs.len(),
            Focus::Exit => self.inputs.len() + 1,
        }
    }

    fn focus_at(&self, position: usize) -> Focus {
        let fields = self.inputs.len();
        if position < fields {
            Focus::Field(position)
        } else if position == fields {
            Focus::Save
        } else {
            Focus::Exit
        }
    }
}
