//! Incoming and active call screens.

use phonebox_core::CallStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::centered;
use crate::App;

/// Render the current call, if any.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(call) = app.call() else {
        return;
    };

    let (status, color) = match call.status {
        CallStatus::Incoming => ("Incoming call".to_owned(), Color::Yellow),
        CallStatus::Active => (call.duration_label(), Color::Green),
    };

    let lines = vec![
        Line::from(Span::styled(status, Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(call.display_name().to_owned(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(call.number.clone().unwrap_or_default()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    frame.render_widget(paragraph, centered(area, 32, 6));
}
