use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::FormState;

use super::components::{
    render_buttons, render_confirm, render_fields, render_footer, render_heading, render_status,
};

pub struct UiContext<'a> {
    pub heading: &'a str,
    pub form: &'a FormState,
    pub success: &'a str,
    pub error: &'a str,
    pub help: Option<&'a str>,
    pub prompt: Option<ConfirmRender<'a>>,
}

pub struct ConfirmRender<'a> {
    pub title: &'a str,
    pub question: &'a str,
    pub yes_selected: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let footer_height = if ctx.help.is_some() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    let cursor_enabled = ctx.prompt.is_none();
    render_heading(frame, chunks[0], ctx.heading);
    render_fields(frame, chunks[1], ctx.form, cursor_enabled);
    render_buttons(frame, chunks[2], ctx.form.focus());
    render_status(frame, chunks[3], ctx.success, ctx.error);
    if let Some(help) = ctx.help {
        render_footer(frame, chunks[4], help);
    }

    if let Some(prompt) = ctx.prompt {
        render_confirm(frame, prompt);
    }
}
