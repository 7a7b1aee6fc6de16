use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    form::Focus,
    presentation::{self, UiContext},
};

use super::{
    confirm::{ConfirmAnswer, ConfirmState},
    controller::FormController,
    input::{KeyAction, classify},
    keymap,
    options::UiOptions,
    scheduler::{Scheduler, TimerQueue},
    terminal::TerminalGuard,
};

pub const HEADING: &str = "Data Entry Form";

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_saved: usize,
    pub output_path: PathBuf,
}

pub(crate) struct App<S: Scheduler = TimerQueue> {
    controller: FormController<S>,
    options: UiOptions,
    help: String,
}

impl<S: Scheduler> App<S> {
    pub fn new(controller: FormController<S>, options: UiOptions) -> Self {
        Self {
            controller,
            options,
            help: keymap::help_text(),
        }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let mut terminal = TerminalGuard::new(&self.options.title)?;
        while !self.controller.should_quit() {
            self.controller.tick();
            terminal.draw(|frame| self.draw(frame))?;
            let tick_rate = self.options.tick_rate;
            let timeout = self
                .controller
                .until_next_timer()
                .map_or(tick_rate, |next| next.min(tick_rate));
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            rows_saved: self.controller.rows_saved(),
            output_path: self.controller.output().path().to_path_buf(),
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let status = self.controller.status();
        presentation::draw(
            frame,
            UiContext {
                heading: HEADING,
                form: self.controller.form(),
                success: status.success(),
                error: status.error(),
                help: self.options.show_help.then_some(self.help.as_str()),
                prompt: self.controller.exit_prompt().map(ConfirmState::as_render),
            },
        );
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(_, _) | Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.controller.exit_prompt().is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match classify(&key) {
            KeyAction::Save => self.save(),
            KeyAction::Submit => self.activate_focused(),
            KeyAction::Quit => self.controller.request_exit(),
            KeyAction::FocusStep(delta) => {
                let form = self.controller.form_mut();
                if delta < 0 {
                    form.focus_prev();
                } else {
                    form.focus_next();
                }
            }
            KeyAction::ClearStatus => self.controller.clear_status(),
            KeyAction::Edit(event) => self.handle_field_input(&event),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.controller.exit_prompt_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => prompt.toggle(),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.controller.answer_exit(Some(ConfirmAnswer::Yes))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.controller.answer_exit(Some(ConfirmAnswer::No))
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let answer = prompt.selection();
                self.controller.answer_exit(Some(answer));
            }
            KeyCode::Esc => self.controller.answer_exit(None),
            _ => {}
        }
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        let focus = self.controller.form().focus();
        if key.code == KeyCode::Char(' ') && key.modifiers == KeyModifiers::NONE {
            match focus {
                Focus::Save | Focus::Exit => {
                    self.activate_focused();
                    return;
                }
                Focus::Field(_) => {}
            }
        }
        if let Some(field) = self.controller.form_mut().focused_field_mut() {
            field.handle_key(key);
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.controller.exit_prompt().is_some() {
            return;
        }
        if let Some(field) = self.controller.form_mut().focused_field_mut() {
            field.paste(text);
        }
    }

    fn activate_focused(&mut self) {
        match self.controller.form().focus() {
            Focus::Exit => self.controller.request_exit(),
            Focus::Field(_) | Focus::Save => self.save(),
        }
    }

    fn save(&mut self) {
        if let Err(err) = self.controller.save() {
            debug!(error = %err, "save did not complete");
        }
    }
}

#[cfg(test)]
impl<S: Scheduler> App<S> {
    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    pub(crate) fn handle_event_for_test(&mut self, event: Event) {
        self.handle_event(event)
    }

    pub(crate) fn controller_for_test(&self) -> &FormController<S> {
        &self.controller
    }
}
