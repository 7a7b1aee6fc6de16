use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use super::super::view::ConfirmRender;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;

pub fn render_confirm(frame: &mut Frame<'_>, prompt: ConfirmRender<'_>) {
    let screen = frame.area();
    let width = (prompt.question.chars().count() as u16)
        .saturating_add(4)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(screen.width);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let question = wrap(prompt.question, text_width)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect::<Vec<_>>();
    // borders + question + blank + buttons
    let height = (question.len() as u16 + 4).min(screen.height);
    let area = centered(screen, width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(prompt.title.to_string())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(question).alignment(Alignment::Center),
        rows[0],
    );

    let choice = |label: &'static str, selected: bool| {
        if selected {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!("  {label}  "))
        }
    };
    let buttons = Line::from(vec![
        choice("Yes", prompt.yes_selected),
        Span::raw("   "),
        choice("No", !prompt.yes_selected),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        rows[1],
    );
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
