//! App container: header and host-provided content.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::App;

/// Render the foreground app.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.app_title().unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), Style::default().add_modifier(Modifier::BOLD)));

    let body = match app.app_session().content() {
        Some(content) => Paragraph::new(content.to_owned()).wrap(Wrap { trim: false }),
        None => Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(body.block(block), area);
}
