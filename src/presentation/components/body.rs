use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

pub fn render_heading(frame: &mut Frame<'_>, area: Rect, heading: &str) {
    let widget = Paragraph::new(Line::styled(
        heading.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Success and error lines. Both always occupy a row, empty or not.
pub fn render_status(frame: &mut Frame<'_>, area: Rect, success: &str, error: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let success_widget = Paragraph::new(success.to_string())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(success_widget, rows[0]);

    let error_widget = Paragraph::new(error.to_string())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error_widget, rows[1]);
}
