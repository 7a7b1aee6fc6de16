use crate::presentation::ConfirmRender;

pub const EXIT_TITLE: &str = "Exit";
pub const EXIT_QUESTION: &str = "Do you really want to exit?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Yes,
    No,
}

/// Modal yes/no prompt. "No" is preselected.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    title: String,
    question: String,
    selected: ConfirmAnswer,
}

impl ConfirmState {
    pub fn new(title: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            selected: ConfirmAnswer::No,
        }
    }

    pub fn exit() -> Self {
        Self::new(EXIT_TITLE, EXIT_QUESTION)
    }

    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            ConfirmAnswer::Yes => ConfirmAnswer::No,
            ConfirmAnswer::No => ConfirmAnswer::Yes,
        };
    }

    pub fn selection(&self) -> ConfirmAnswer {
        self.selected
    }

    pub(crate) fn as_render(&self) -> ConfirmRender<'_> {
        ConfirmRender {
            title: &self.title,
            question: &self.question,
            yes_selected: self.selected == ConfirmAnswer::Yes,
        }
    }
}
