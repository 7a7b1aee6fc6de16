use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{FieldState, Focus, FormState};

const HIGHLIGHT_SYMBOL: &str = "» ";
const INPUT_WIDTH: usize = 30;

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, form: &FormState, enable_cursor: bool) {
    let label_width = form
        .inputs()
        .iter()
        .map(|input| input.definition.display_label().width())
        .max()
        .unwrap_or(0);
    let selected = match form.focus() {
        Focus::Field(index) => Some(index),
        Focus::Save | Focus::Exit => None,
    };

    let items = form
        .inputs()
        .iter()
        .enumerate()
        .map(|(index, input)| {
            ListItem::new(field_line(input, label_width, selected == Some(index)))
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);

    if !enable_cursor {
        return;
    }
    let Some(index) = selected else {
        return;
    };
    let Some(input) = form.inputs().get(index) else {
        return;
    };
    let line = index.saturating_sub(state.offset()) as u16;
    let column = HIGHLIGHT_SYMBOL.width() + label_width + 1 + input.value().width();
    let inner_right = area.right().saturating_sub(2);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(column as u16)
        .min(inner_right);
    let cursor_y = area.y.saturating_add(1).saturating_add(line);
    if cursor_y < area.bottom().saturating_sub(1) {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn field_line(input: &FieldState, label_width: usize, focused: bool) -> Line<'static> {
    let label = input.definition.display_label();
    let padding = label_width.saturating_sub(label.width());
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let value = input.value();
    let fill = INPUT_WIDTH.saturating_sub(value.width());
    let input_text = format!("{value}{}", " ".repeat(fill));

    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(
            input_text,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
    ])
}
