use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, help: &str) {
    let widget = Paragraph::new(format!("Actions: {help}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(widget, area);
}
